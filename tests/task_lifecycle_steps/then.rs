//! Then steps for task store lifecycle BDD scenarios.

use rstest_bdd_macros::then;
use taskdeck::task::domain::{TaskDomainError, TaskId};
use taskdeck::task::store::TaskStoreError;

use super::world::TaskStoreWorld;

#[then("task {id:u64} is completed")]
fn task_is_completed(world: &TaskStoreWorld, id: u64) -> Result<(), eyre::Report> {
    let task = world
        .store
        .get(TaskId::from_u64(id))
        .map_err(|err| eyre::eyre!("task lookup failed: {err}"))?;
    if !task.completed() {
        return Err(eyre::eyre!("expected task {id} to be completed"));
    }
    Ok(())
}

#[then("only task {id:u64} remains when completed tasks are excluded")]
fn only_task_remains_excluding_completed(
    world: &TaskStoreWorld,
    id: u64,
) -> Result<(), eyre::Report> {
    assert_single_listing(world, id, false)
}

#[then("only task {id:u64} remains when completed tasks are included")]
fn only_task_remains_including_completed(
    world: &TaskStoreWorld,
    id: u64,
) -> Result<(), eyre::Report> {
    assert_single_listing(world, id, true)
}

#[then("the lookup fails with not found")]
fn lookup_fails_with_not_found(world: &TaskStoreWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_lookup
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lookup result in scenario world"))?;
    if !matches!(result, Err(TaskStoreError::NotFound(_))) {
        return Err(eyre::eyre!("expected NotFound, got {result:?}"));
    }
    Ok(())
}

#[then("the creation is rejected for validation")]
fn creation_rejected_for_validation(world: &TaskStoreWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing creation result in scenario world"))?;
    if !matches!(
        result,
        Err(TaskStoreError::Validation(TaskDomainError::EmptyTitle))
    ) {
        return Err(eyre::eyre!("expected EmptyTitle validation error, got {result:?}"));
    }
    Ok(())
}

#[then("the newest task has id {id:u64}")]
fn newest_task_has_id(world: &TaskStoreWorld, id: u64) -> Result<(), eyre::Report> {
    let result = world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing creation result in scenario world"))?;
    let task = result
        .as_ref()
        .map_err(|err| eyre::eyre!("creation failed: {err}"))?;
    if task.id() != TaskId::from_u64(id) {
        return Err(eyre::eyre!("expected id {id}, got {}", task.id()));
    }
    Ok(())
}

/// Asserts that a listing holds exactly one task with the given id.
fn assert_single_listing(
    world: &TaskStoreWorld,
    id: u64,
    include_completed: bool,
) -> Result<(), eyre::Report> {
    let ids: Vec<TaskId> = world
        .store
        .list(include_completed)
        .iter()
        .map(|task| task.id())
        .collect();
    if ids != vec![TaskId::from_u64(id)] {
        return Err(eyre::eyre!("expected only task {id} in listing, got {ids:?}"));
    }
    Ok(())
}
