//! Task tracking for Taskdeck.
//!
//! This module implements the task-collection manager: creating records with
//! store-assigned sequential identifiers, retrieving and updating them,
//! filtering by completion state, marking them completed, and deleting them
//! permanently. The layout separates concerns:
//!
//! - Domain types in [`domain`]
//! - The stateful collection manager in [`store`]

pub mod domain;
pub mod store;

#[cfg(test)]
mod tests;
