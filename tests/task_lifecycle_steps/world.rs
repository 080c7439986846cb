//! Shared world state for task list lifecycle BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rstest::fixture;
use taskdeck::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{OverdueNotice, TaskId},
    services::{DueDateMonitor, TaskLifecycleError, TaskLifecycleService},
};

use crate::test_helpers::{ManualClock, instant};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskStore, ManualClock>;

/// Scenario world for task list behaviour tests.
pub struct TaskListWorld {
    pub service: TestTaskService,
    pub clock: ManualClock,
    pub monitor: DueDateMonitor,
    pub last_error: Option<TaskLifecycleError>,
    pub last_notices: Vec<OverdueNotice>,
}

impl TaskListWorld {
    /// Creates a world with an empty task list.
    #[must_use]
    pub fn new() -> Self {
        let clock = ManualClock::at(instant("2024-01-01T00:00:00Z"));
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskStore::new()),
            Arc::new(clock.clone()),
        );

        Self {
            service,
            clock,
            monitor: DueDateMonitor::new(),
            last_error: None,
            last_notices: Vec::new(),
        }
    }

    /// Records the outcome of a `when` step.
    pub fn record<T>(&mut self, result: Result<T, TaskLifecycleError>) {
        self.last_error = result.err();
    }

    /// Looks up the identifier of the task with the given name.
    pub fn id_of(&self, name: &str) -> Result<TaskId, eyre::Report> {
        let tasks = run_async(self.service.list())?;
        tasks
            .iter()
            .find(|task| task.name().as_str() == name)
            .map(|task| task.id().clone())
            .ok_or_else(|| eyre::eyre!("no task named '{name}' in scenario world"))
    }
}

impl Default for TaskListWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListWorld {
    TaskListWorld::default()
}

/// Splits a comma separated list of task names.
pub fn split_names(names: &str) -> Vec<String> {
    names
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parses an RFC 3339 instant written in a scenario.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, eyre::Report> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
