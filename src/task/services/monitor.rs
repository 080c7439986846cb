//! Due-date monitoring with one notice per overdue transition.

use crate::task::domain::{OverdueNotice, Task, TaskId};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

/// Monitoring state of a single task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonitorState {
    /// The task has no due date.
    NoDueDate,
    /// The task has a due date that has not been reported as reached.
    Pending,
    /// The task was reported overdue for its current due date.
    OverdueNotified,
}

/// Detects tasks whose due date has just been reached.
///
/// The monitor never caches tasks: each [`scan`](Self::scan) works on the
/// snapshot it is given. It only remembers, per task, the due instant for
/// which a notice was emitted, so that a transition is reported once.
#[derive(Debug, Clone, Default)]
pub struct DueDateMonitor {
    notified: HashMap<TaskId, DateTime<Utc>>,
}

impl DueDateMonitor {
    /// Creates a monitor with every task pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns notices for tasks that became overdue at `now`.
    ///
    /// Calling `scan` again with the same snapshot and instant returns no
    /// notices. Moving a reported task's due date later re-arms it; moving
    /// it earlier keeps it reported. Tasks missing from `tasks` stop being
    /// tracked.
    pub fn scan(&mut self, tasks: &[Task], now: DateTime<Utc>) -> Vec<OverdueNotice> {
        let present: HashSet<&TaskId> = tasks.iter().map(Task::id).collect();
        self.notified.retain(|id, _| present.contains(id));

        let mut notices = Vec::new();
        for task in tasks {
            let Some(due_date) = task.due_date() else {
                self.notified.remove(task.id());
                continue;
            };
            let due_at = due_date.instant();

            if let Some(reported_for) = self.notified.get_mut(task.id()) {
                if due_at <= *reported_for {
                    *reported_for = due_at;
                    continue;
                }
                self.notified.remove(task.id());
            }

            if due_date.is_due_at(now) {
                self.notified.insert(task.id().clone(), due_at);
                notices.extend(OverdueNotice::for_task(task));
            }
        }
        notices
    }

    /// Returns the monitoring state of `task`.
    #[must_use]
    pub fn state_of(&self, task: &Task) -> MonitorState {
        let Some(due_date) = task.due_date() else {
            return MonitorState::NoDueDate;
        };
        match self.notified.get(task.id()) {
            Some(reported_for) if due_date.instant() <= *reported_for => {
                MonitorState::OverdueNotified
            }
            _ => MonitorState::Pending,
        }
    }

    /// Returns the number of tasks currently reported overdue.
    #[must_use]
    pub fn notified_count(&self) -> usize {
        self.notified.len()
    }
}
