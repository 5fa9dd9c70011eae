//! Shared world state for task store lifecycle BDD scenarios.

use rstest::fixture;
use taskdeck::task::domain::Task;
use taskdeck::task::store::{TaskStore, TaskStoreError};

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskStoreWorld {
    pub store: TaskStore,
    pub last_created: Option<Result<Task, TaskStoreError>>,
    pub last_lookup: Option<Result<Task, TaskStoreError>>,
}

impl TaskStoreWorld {
    /// Creates a world with a fresh store and no recorded results.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: TaskStore::new(),
            last_created: None,
            last_lookup: None,
        }
    }
}

impl Default for TaskStoreWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStoreWorld {
    TaskStoreWorld::default()
}
