//! Store port for persisting the ordered task snapshot.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Snapshot persistence contract.
///
/// The store deals in whole snapshots only: callers compute the complete new
/// ordered sequence and hand it to [`TaskStore::replace_all`].
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Reads the persisted snapshot in order.
    ///
    /// A missing or unparsable snapshot yields an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the underlying storage
    /// cannot be read.
    async fn load(&self) -> TaskStoreResult<Vec<Task>>;

    /// Atomically overwrites the persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when two tasks share an
    /// identifier, or [`TaskStoreError::Persistence`] when the write fails.
    async fn replace_all(&self, tasks: &[Task]) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// Two tasks in the snapshot share an identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Checks that every task identifier in `tasks` is unique.
///
/// # Errors
///
/// Returns [`TaskStoreError::DuplicateTask`] naming the first repeated
/// identifier.
pub fn ensure_unique_ids(tasks: &[Task]) -> TaskStoreResult<()> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen.insert(task.id()) {
            return Err(TaskStoreError::DuplicateTask(task.id().clone()));
        }
    }
    Ok(())
}
