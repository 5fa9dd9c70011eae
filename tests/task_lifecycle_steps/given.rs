//! Given steps for task store lifecycle BDD scenarios.

use rstest_bdd_macros::given;
use taskdeck::task::store::TaskStore;

use super::world::TaskStoreWorld;

#[given("an empty task store")]
fn empty_task_store(world: &mut TaskStoreWorld) {
    world.store = TaskStore::new();
    world.last_created = None;
    world.last_lookup = None;
}
