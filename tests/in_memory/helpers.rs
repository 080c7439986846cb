//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use rstest::fixture;
use taskdeck::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{Task, TaskId},
    services::{CreateTaskRequest, TaskLifecycleService},
};

pub use crate::test_helpers::{ManualClock, instant};

/// Service type shared by the in-memory integration tests.
pub type TestService = TaskLifecycleService<InMemoryTaskStore, ManualClock>;

/// Service, store and clock wired together.
pub struct Harness {
    pub service: TestService,
    pub store: InMemoryTaskStore,
    pub clock: ManualClock,
}

/// Fixture providing an empty store and a clock set to 1 February 2024.
#[fixture]
pub fn harness() -> Harness {
    let store = InMemoryTaskStore::new();
    let clock = ManualClock::at(instant("2024-02-01T00:00:00Z"));
    let service = TaskLifecycleService::new(Arc::new(store.clone()), Arc::new(clock.clone()));
    Harness {
        service,
        store,
        clock,
    }
}

/// Creates one work task per name, in order, and returns their identifiers.
pub async fn seed(service: &TestService, names: &[&str]) -> Vec<TaskId> {
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        let task = service
            .create(CreateTaskRequest::new(*name, "work", "medium"))
            .await
            .expect("seed task creation should succeed");
        ids.push(task.id().clone());
    }
    ids
}

/// Returns the task names in stored order.
pub fn names(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(|task| task.name().to_string()).collect()
}
