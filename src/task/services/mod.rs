//! Application services for the task tracker.

mod lifecycle;
mod monitor;
pub mod watch;

pub use lifecycle::{
    CreateTaskRequest, DueDateChange, TaskLifecycleError, TaskLifecycleResult,
    TaskLifecycleService, UpdateTaskRequest,
};
pub use monitor::{DueDateMonitor, MonitorState};
pub use watch::run_due_date_watch;
