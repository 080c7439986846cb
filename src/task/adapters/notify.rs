//! Overdue notifier adapters.

use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

use crate::task::{domain::OverdueNotice, ports::OverdueNotifier};

/// Notifier that reports overdue tasks through the `tracing` pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl OverdueNotifier for TracingNotifier {
    fn notify(&self, notice: &OverdueNotice) {
        info!(
            task_id = %notice.task_id,
            due_date = %notice.due_date,
            "task \"{}\" is due",
            notice.name
        );
    }
}

/// Notifier that keeps every notice it receives.
///
/// Clones share the same buffer, so a presentation layer can hold one handle
/// and drain notices delivered through another.
#[derive(Debug, Clone, Default)]
pub struct CollectingNotifier {
    notices: Arc<Mutex<Vec<OverdueNotice>>>,
}

impl CollectingNotifier {
    /// Creates an empty collecting notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every notice received so far.
    #[must_use]
    pub fn drain(&self) -> Vec<OverdueNotice> {
        let mut notices = self.notices.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *notices)
    }
}

impl OverdueNotifier for CollectingNotifier {
    fn notify(&self, notice: &OverdueNotice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice.clone());
    }
}
