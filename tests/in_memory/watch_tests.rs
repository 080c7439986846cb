//! Timer-driven due-date checks delivered through a notifier.

use std::time::Duration;

use super::helpers::{Harness, harness, instant};
use eyre::ensure;
use rstest::rstest;
use taskdeck::task::{
    adapters::notify::CollectingNotifier,
    services::{CreateTaskRequest, DueDateMonitor, run_due_date_watch},
};
use tokio::time::sleep;

const TICK: Duration = Duration::from_secs(1);

fn due_task(name: &str, due: &str) -> CreateTaskRequest {
    CreateTaskRequest::new(name, "personal", "high").with_due_date(due)
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn watch_delivers_each_transition_once(harness: Harness) -> eyre::Result<()> {
    harness
        .service
        .create(due_task("Pay rent", "2024-01-01T00:00:00Z"))
        .await?;
    let notifier = CollectingNotifier::new();

    let watch = run_due_date_watch(
        &harness.service,
        DueDateMonitor::new(),
        &notifier,
        TICK,
        sleep(TICK * 4 + TICK / 2),
    );
    let driver = async {
        sleep(TICK + TICK / 2).await;
        harness
            .service
            .create(due_task("Renew passport", "2024-01-20T00:00:00Z"))
            .await
    };
    let (monitor, created) = tokio::join!(watch, driver);
    created?;

    let delivered: Vec<String> = notifier
        .drain()
        .iter()
        .map(|notice| notice.name.to_string())
        .collect();
    ensure!(delivered == ["Pay rent", "Renew passport"]);
    ensure!(monitor.notified_count() == 2);
    Ok(())
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn watch_reports_tasks_once_the_clock_reaches_them(harness: Harness) -> eyre::Result<()> {
    harness
        .service
        .create(due_task("Quarterly report", "2024-03-31T17:00:00Z"))
        .await?;
    let notifier = CollectingNotifier::new();

    let watch = run_due_date_watch(
        &harness.service,
        DueDateMonitor::new(),
        &notifier,
        TICK,
        sleep(TICK * 3 + TICK / 2),
    );
    let driver = async {
        sleep(TICK + TICK / 2).await;
        ensure!(notifier.drain().is_empty(), "nothing should be due yet");
        harness.clock.set(instant("2024-04-01T00:00:00Z"));
        Ok::<(), eyre::Report>(())
    };
    let (_monitor, driven) = tokio::join!(watch, driver);
    driven?;

    ensure!(notifier.drain().len() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn monitor_state_survives_a_restarted_watch(harness: Harness) -> eyre::Result<()> {
    harness
        .service
        .create(due_task("Pay rent", "2024-01-01T00:00:00Z"))
        .await?;
    let notifier = CollectingNotifier::new();

    let first = run_due_date_watch(
        &harness.service,
        DueDateMonitor::new(),
        &notifier,
        TICK,
        sleep(TICK / 2),
    )
    .await;
    let second = run_due_date_watch(&harness.service, first, &notifier, TICK, sleep(TICK * 2)).await;

    ensure!(notifier.drain().len() == 1);
    ensure!(second.notified_count() == 1);
    Ok(())
}
