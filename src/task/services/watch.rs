//! Recurring due-date check driven by a timer.

use crate::task::{
    ports::{OverdueNotifier, TaskStore},
    services::{DueDateMonitor, TaskLifecycleService},
};
use mockable::Clock;
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Shortest accepted interval between checks.
pub const MIN_WATCH_INTERVAL: Duration = Duration::from_millis(10);

/// Runs due-date checks every `interval` until `shutdown` completes.
///
/// The first check runs immediately. Each notice is handed to `notifier`
/// exactly once. A failed check is logged and left to the next tick. The
/// monitor is returned on shutdown so that its state can be reused.
pub async fn run_due_date_watch<S, C, N>(
    service: &TaskLifecycleService<S, C>,
    mut monitor: DueDateMonitor,
    notifier: &N,
    interval: Duration,
    shutdown: impl Future<Output = ()>,
) -> DueDateMonitor
where
    S: TaskStore,
    C: Clock + Send + Sync,
    N: OverdueNotifier + ?Sized,
{
    let mut ticker = tokio::time::interval(interval.max(MIN_WATCH_INTERVAL));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;
            () = &mut shutdown => break,
            _ = ticker.tick() => match service.check_due_dates(&mut monitor).await {
                Ok(notices) => {
                    debug!(count = notices.len(), "due-date check complete");
                    for notice in &notices {
                        notifier.notify(notice);
                    }
                }
                Err(err) => warn!(error = %err, "due-date check failed, retrying on next tick"),
            },
        }
    }
    monitor
}
