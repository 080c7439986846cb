//! In-memory snapshot store for tests and embedding.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::Task,
    ports::{
        TaskStore, TaskStoreError, TaskStoreResult,
        store::ensure_unique_ids,
    },
};

/// Thread-safe in-memory task store.
///
/// Clones share the same underlying snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when two tasks share an
    /// identifier.
    pub fn with_tasks(tasks: Vec<Task>) -> TaskStoreResult<Self> {
        ensure_unique_ids(&tasks)?;
        Ok(Self {
            state: Arc::new(RwLock::new(tasks)),
        })
    }
}

fn poisoned(err: impl ToString) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn load(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.clone())
    }

    async fn replace_all(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        ensure_unique_ids(tasks)?;
        let mut state = self.state.write().map_err(poisoned)?;
        *state = tasks.to_vec();
        Ok(())
    }
}
