//! Task aggregate root and its validated name.

use super::{Category, DueDate, Priority, TaskDomainError, TaskId};
use std::fmt;

/// Display name of a task, trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskName(String);

impl TaskName {
    /// Creates a validated task name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] if the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTaskName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for TaskName {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskName> for String {
    fn from(value: TaskName) -> Self {
        value.0
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task aggregate root.
///
/// Only the content fields are mutable; the identifier is fixed at creation
/// and the position of a task belongs to the collection holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    category: Category,
    priority: Priority,
    due_date: Option<DueDate>,
}

/// Parameter object for reconstructing a persisted or imported task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted display name.
    pub name: TaskName,
    /// Persisted category.
    pub category: Category,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted due date, if any.
    pub due_date: Option<DueDate>,
}

impl Task {
    /// Creates a new task with a fresh identifier.
    #[must_use]
    pub fn new(
        name: TaskName,
        category: Category,
        priority: Priority,
        due_date: Option<DueDate>,
    ) -> Self {
        Self {
            id: TaskId::new(),
            name,
            category,
            priority,
            due_date,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            category: data.category,
            priority: data.priority,
            due_date: data.due_date,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<&DueDate> {
        self.due_date.as_ref()
    }

    /// Replaces the display name.
    pub fn rename(&mut self, name: TaskName) {
        self.name = name;
    }

    /// Files the task under another category.
    pub const fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Changes the display emphasis.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Sets or clears the due date.
    pub fn set_due_date(&mut self, due_date: Option<DueDate>) {
        self.due_date = due_date;
    }
}
