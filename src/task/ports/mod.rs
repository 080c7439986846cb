//! Port contracts for the task tracker.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod notifier;
pub mod store;

pub use notifier::OverdueNotifier;
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
