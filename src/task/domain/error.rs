//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The category value is not one of the supported categories.
    #[error("unknown task category '{0}', expected one of: work, personal, shopping, other")]
    UnknownCategory(String),

    /// The priority value is not one of the supported priorities.
    #[error("unknown task priority '{0}', expected one of: low, medium, high")]
    UnknownPriority(String),

    /// The due date does not describe a valid point in time.
    #[error("invalid due date '{0}', expected RFC 3339 or YYYY-MM-DDTHH:MM")]
    InvalidDueDate(String),
}
