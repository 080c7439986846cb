//! Wire shape of a single task record.

use crate::task::domain::{
    Category, DueDate, PersistedTaskData, Priority, Task, TaskDomainError, TaskId, TaskName,
};
use serde::{Deserialize, Serialize};

/// Raw task record as it appears in a snapshot.
///
/// Fields stay textual here so that validation can report which record and
/// which field failed instead of aborting on the first bad value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TaskRecord {
    pub(super) id: String,
    pub(super) name: String,
    pub(super) category: String,
    pub(super) priority: String,
    #[serde(default)]
    pub(super) due_date: Option<String>,
}

impl TaskRecord {
    /// Validates the record into a task.
    ///
    /// An empty `dueDate` string means "no due date", as written by the
    /// browser form when the field is left blank.
    pub(super) fn into_task(self) -> Result<Task, TaskDomainError> {
        let due_date = match self.due_date {
            Some(raw) if !raw.trim().is_empty() => Some(DueDate::parse(raw)?),
            _ => None,
        };
        Ok(Task::from_persisted(PersistedTaskData {
            id: TaskId::parse(self.id)?,
            name: TaskName::new(self.name)?,
            category: Category::try_from(self.category.as_str())?,
            priority: Priority::try_from(self.priority.as_str())?,
            due_date,
        }))
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            name: task.name().to_string(),
            category: task.category().as_str().to_owned(),
            priority: task.priority().as_str().to_owned(),
            due_date: task.due_date().map(ToString::to_string),
        }
    }
}
