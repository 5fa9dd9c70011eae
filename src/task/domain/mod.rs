//! Domain types for the task tracker.
//!
//! Domain types carry no storage concerns: identifier allocation and record
//! ownership live in the store. Everything here is a value type that
//! validates its own inputs.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{CreateTaskRequest, DueDateChange, Task, UpdateTaskRequest};
