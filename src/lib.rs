//! Taskdeck: a single-user ordered task tracker.
//!
//! Tasks carry a name, a category, a priority and an optional due date, and
//! live in one user-arranged sequence that is persisted as a whole after
//! every change. A due-date monitor reports each task once when it becomes
//! overdue, and snapshots can be exported to and imported from JSON.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: task values and their validation, free of I/O
//! - **Ports**: the snapshot store and notification contracts
//! - **Adapters**: in-memory and file-backed stores, notifiers
//!
//! # Modules
//!
//! - [`task`]: Task model, persistence, lifecycle operations and monitoring
//! - [`config`]: Environment-driven runtime settings
//! - [`telemetry`]: Tracing subscriber installation for binaries

pub mod config;
pub mod task;
pub mod telemetry;
