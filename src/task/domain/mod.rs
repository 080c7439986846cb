//! Domain model for the task tracker.
//!
//! A task carries a validated name, a category, a priority and an optional
//! due date. Ordering is a property of the collection that holds tasks, so
//! nothing in this module knows about positions or persistence.

mod attributes;
mod due_date;
mod error;
mod ids;
mod notice;
mod task;

pub use attributes::{Category, Priority};
pub use due_date::DueDate;
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use notice::OverdueNotice;
pub use task::{PersistedTaskData, Task, TaskName};
