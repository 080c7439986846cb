//! When steps for task list lifecycle BDD scenarios.

use super::world::{TaskListWorld, parse_instant, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskdeck::task::services::CreateTaskRequest;

#[when(r#"I add a task named "{name}" in "{category}" with priority "{priority}""#)]
fn add_task(world: &mut TaskListWorld, name: String, category: String, priority: String) {
    let result = run_async(
        world
            .service
            .create(CreateTaskRequest::new(name, category, priority)),
    );
    world.record(result);
}

#[when(r#"I move "{name}" to position {index:usize}"#)]
fn move_task(world: &mut TaskListWorld, name: String, index: usize) -> Result<(), eyre::Report> {
    let id = world.id_of(&name)?;
    let result = run_async(world.service.reorder(&id, index));
    world.record(result);
    Ok(())
}

#[when(r#"I delete "{name}""#)]
fn delete_task(world: &mut TaskListWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&name)?;
    let result = run_async(world.service.delete(&id));
    world.record(result);
    Ok(())
}

#[when("I import a payload that is not JSON")]
fn import_invalid_payload(world: &mut TaskListWorld) {
    let result = run_async(world.service.import_snapshot(b"not valid json"));
    world.record(result);
}

#[when(r#"due dates are checked at "{now}""#)]
fn check_due_dates(world: &mut TaskListWorld, now: String) -> Result<(), eyre::Report> {
    world.clock.set(parse_instant(&now)?);
    let notices = run_async(world.service.check_due_dates(&mut world.monitor))
        .wrap_err("check due dates in scenario")?;
    world.last_notices = notices;
    Ok(())
}
