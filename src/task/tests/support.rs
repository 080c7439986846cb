//! Shared fixtures for task unit tests.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

use crate::task::domain::{
    Category, DueDate, PersistedTaskData, Priority, Task, TaskId, TaskName,
};

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parses an RFC 3339 instant used as test input.
pub fn instant(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("valid RFC 3339 test instant")
        .with_timezone(&Utc)
}

/// Builds a task with a fixed identifier.
pub fn task(id: &str, name: &str, due: Option<&str>) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::parse(id).expect("valid test id"),
        name: TaskName::new(name).expect("valid test name"),
        category: Category::Work,
        priority: Priority::Medium,
        due_date: due.map(|raw| DueDate::parse(raw).expect("valid test due date")),
    })
}

/// Returns the identifiers of `tasks` in order.
pub fn ids(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(|task| task.id().to_string()).collect()
}

/// Returns the task at `index`, panicking with a readable message if absent.
pub fn nth(tasks: &[Task], index: usize) -> &Task {
    tasks.get(index).expect("task at index")
}
