//! Event raised when a task becomes overdue.

use super::{DueDate, Task, TaskId, TaskName};

/// Notice emitted once when a task's due date is first seen to have passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverdueNotice {
    /// Identifier of the overdue task.
    pub task_id: TaskId,
    /// Display name at the time the transition was observed.
    pub name: TaskName,
    /// Due date that was reached.
    pub due_date: DueDate,
}

impl OverdueNotice {
    /// Builds a notice for `task` if it carries a due date.
    #[must_use]
    pub fn for_task(task: &Task) -> Option<Self> {
        task.due_date().map(|due_date| Self {
            task_id: task.id().clone(),
            name: task.name().clone(),
            due_date: due_date.clone(),
        })
    }
}
