//! Taskdeck: a single-process, in-memory task tracker.
//!
//! This crate provides the core functionality for tracking short to-do
//! records: creating them with an optional due date, listing and filtering
//! them, marking them completed, and deleting them. State lives only for the
//! lifetime of the process.
//!
//! # Architecture
//!
//! The only stateful component is the task store; everything else is
//! presentation glue:
//!
//! - **Domain**: validated record types with no infrastructure dependencies
//! - **Store**: identity allocation, lookup, mutation, and deletion
//! - **Binaries**: the interactive menu and the coverage-badge updater
//!
//! # Modules
//!
//! - [`task`]: task records, the store, and their error types
//! - [`badge`]: coverage-badge rewriting for documentation files

pub mod badge;
pub mod task;
