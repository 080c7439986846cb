//! Notification boundary for overdue tasks.

use crate::task::domain::OverdueNotice;

/// Sink for overdue notices.
///
/// Implementations decide how a notice reaches the user (sound, system
/// notification, banner) and own any platform permission that requires.
pub trait OverdueNotifier: Send + Sync {
    /// Delivers one notice. Called exactly once per overdue transition.
    fn notify(&self, notice: &OverdueNotice);
}
