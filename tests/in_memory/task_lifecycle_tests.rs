//! In-memory integration tests for task lifecycle operations.

use super::helpers::{Harness, harness, instant, names, seed};
use eyre::{ensure, eyre};
use rstest::rstest;
use taskdeck::task::{
    domain::{Category, Priority, TaskId},
    ports::TaskStore,
    services::{CreateTaskRequest, DueDateMonitor, TaskLifecycleError, UpdateTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_are_listed_in_creation_order(harness: Harness) -> eyre::Result<()> {
    seed(&harness.service, &["Alpha", "Bravo"]).await;
    let created = harness
        .service
        .create(
            CreateTaskRequest::new("Pay rent", "Personal", "HIGH")
                .with_due_date("2024-01-01T00:00:00Z"),
        )
        .await?;

    let listed = harness.service.list().await?;

    ensure!(names(&listed) == ["Alpha", "Bravo", "Pay rent"]);
    let last = listed.last().ok_or_else(|| eyre!("expected a task"))?;
    ensure!(last == &created);
    ensure!(last.category() == Category::Personal);
    ensure!(last.priority() == Priority::High);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edits_keep_identity_and_position(harness: Harness) -> eyre::Result<()> {
    let ids = seed(&harness.service, &["Alpha", "Bravo", "Charlie"]).await;
    let bravo = ids.get(1).ok_or_else(|| eyre!("missing seeded id"))?;

    harness
        .service
        .update(
            UpdateTaskRequest::new(bravo.clone())
                .with_name("Bravo, revised")
                .with_priority("low"),
        )
        .await?;
    let fetched = harness.service.get(bravo).await?;

    ensure!(fetched.id() == bravo);
    ensure!(fetched.priority() == Priority::Low);
    ensure!(names(&harness.store.load().await?) == ["Alpha", "Bravo, revised", "Charlie"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_then_reorder_preserves_relative_order(harness: Harness) -> eyre::Result<()> {
    let ids = seed(&harness.service, &["A", "B", "C", "D", "E"]).await;
    let [a, b, _, _, e] = ids.as_slice() else {
        return Err(eyre!("expected five seeded ids"));
    };

    harness.service.delete(b).await?;
    harness.service.reorder(e, 0).await?;
    harness.service.reorder(a, 3).await?;

    ensure!(names(&harness.service.list().await?) == ["E", "C", "D", "A"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_operations_leave_the_list_untouched(harness: Harness) -> eyre::Result<()> {
    let ids = seed(&harness.service, &["Alpha", "Bravo"]).await;
    let alpha = ids.first().ok_or_else(|| eyre!("missing seeded id"))?;
    let ghost = TaskId::parse("ghost")?;
    let before = harness.store.load().await?;

    let out_of_range = harness.service.reorder(alpha, 2).await;
    let missing = harness.service.delete(&ghost).await;
    let blank = harness
        .service
        .update(UpdateTaskRequest::new(alpha.clone()).with_name("   "))
        .await;
    let bad_due = harness
        .service
        .update(UpdateTaskRequest::new(alpha.clone()).with_due_date("tomorrow-ish"))
        .await;

    ensure!(matches!(
        out_of_range,
        Err(TaskLifecycleError::OutOfRange { index: 2, len: 2 })
    ));
    ensure!(matches!(missing, Err(TaskLifecycleError::NotFound(_))));
    ensure!(matches!(blank, Err(TaskLifecycleError::Validation(_))));
    ensure!(matches!(bad_due, Err(TaskLifecycleError::Validation(_))));
    ensure!(harness.store.load().await? == before);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn due_dates_are_reported_once_as_time_passes(harness: Harness) -> eyre::Result<()> {
    let ids = seed(&harness.service, &["Later"]).await;
    let later = ids.first().ok_or_else(|| eyre!("missing seeded id"))?;
    harness
        .service
        .update(UpdateTaskRequest::new(later.clone()).with_due_date("2024-03-01T00:00:00Z"))
        .await?;
    let mut monitor = DueDateMonitor::new();

    let before_due = harness.service.check_due_dates(&mut monitor).await?;
    harness.clock.set(instant("2024-03-01T00:00:00Z"));
    let at_due = harness.service.check_due_dates(&mut monitor).await?;
    let after_due = harness.service.check_due_dates(&mut monitor).await?;

    ensure!(before_due.is_empty());
    ensure!(at_due.len() == 1);
    ensure!(at_due.first().map(|notice| &notice.task_id) == Some(later));
    ensure!(after_due.is_empty());
    Ok(())
}
