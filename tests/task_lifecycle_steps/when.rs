//! When steps for task store lifecycle BDD scenarios.

use chrono::NaiveDate;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskdeck::task::domain::{CreateTaskRequest, TaskId};

use super::world::TaskStoreWorld;

#[when(r#"a task "{title}" described "{description}" is created"#)]
fn create_task(world: &mut TaskStoreWorld, title: String, description: String) {
    let result = world.store.create(CreateTaskRequest::new(title, description));
    world.last_created = Some(result);
}

#[when(r#"a task "{title}" described "{description}" due on "{due}" is created"#)]
fn create_task_with_due_date(
    world: &mut TaskStoreWorld,
    title: String,
    description: String,
    due: String,
) -> Result<(), eyre::Report> {
    let due_date = NaiveDate::parse_from_str(&due, "%Y-%m-%d")
        .wrap_err("parse scenario due date")?;
    let request = CreateTaskRequest::new(title, description).with_due_date(due_date);
    world.last_created = Some(world.store.create(request));
    Ok(())
}

#[when("creating a task with an empty title is attempted")]
fn create_task_with_empty_title(world: &mut TaskStoreWorld) {
    let result = world.store.create(CreateTaskRequest::new("", "x"));
    world.last_created = Some(result);
}

#[when("task {id:u64} is marked completed")]
fn mark_task_completed(world: &mut TaskStoreWorld, id: u64) -> Result<(), eyre::Report> {
    world
        .store
        .mark_completed(TaskId::from_u64(id))
        .wrap_err("mark task completed in scenario")?;
    Ok(())
}

#[when("task {id:u64} is deleted")]
fn delete_task(world: &mut TaskStoreWorld, id: u64) -> Result<(), eyre::Report> {
    world
        .store
        .delete(TaskId::from_u64(id))
        .wrap_err("delete task in scenario")?;
    Ok(())
}

#[when("task {id:u64} is looked up")]
fn look_up_task(world: &mut TaskStoreWorld, id: u64) {
    world.last_lookup = Some(world.store.get(TaskId::from_u64(id)));
}
