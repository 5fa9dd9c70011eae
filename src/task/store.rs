//! The task store: sole authority over task identity, existence, and
//! mutation.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::task::domain::{CreateTaskRequest, Task, TaskDomainError, TaskId, UpdateTaskRequest};

/// Result type for store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Errors returned by store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// A required field failed domain validation.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The operation addressed an identifier with no record.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// In-memory task collection with store-assigned sequential identifiers.
///
/// The store hands out owned copies of its records: mutating a returned
/// [`Task`] never changes stored state, and stored mutations are observed
/// only through a fresh lookup. Methods are synchronous and perform no I/O;
/// a multi-threaded embedder wraps the whole store in a single mutex, since
/// identifier allocation and record mutation are not otherwise atomic.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: BTreeMap<TaskId, Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates an empty store. The first created task receives id 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Creates a task from the request and returns a copy of the new record.
    ///
    /// Identifiers are allocated in a strictly increasing sequence and never
    /// reused; a rejected request leaves the counter and the collection
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when the request title or
    /// description is empty after trimming.
    pub fn create(&mut self, request: CreateTaskRequest) -> TaskStoreResult<Task> {
        let id = TaskId::from_u64(self.next_id);
        let task = Task::from_request(id, request)?;
        self.tasks.insert(id, task.clone());
        self.next_id += 1;
        Ok(task)
    }

    /// Returns a copy of the record for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no record exists for `id`.
    pub fn get(&self, id: TaskId) -> TaskStoreResult<Task> {
        self.tasks
            .get(&id)
            .cloned()
            .ok_or(TaskStoreError::NotFound(id))
    }

    /// Applies the supplied fields of `request` to the record for `id` and
    /// returns a copy of the updated record.
    ///
    /// Identity and completion state are never altered by an update. The
    /// operation either fully applies or has no effect.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no record exists for `id`,
    /// or [`TaskStoreError::Validation`] when a supplied replacement field is
    /// empty after trimming.
    pub fn update(&mut self, id: TaskId, request: UpdateTaskRequest) -> TaskStoreResult<Task> {
        let task = self
            .tasks
            .get_mut(&id)
            .ok_or(TaskStoreError::NotFound(id))?;
        request.validate()?;
        task.apply_update(request);
        Ok(task.clone())
    }

    /// Removes the record for `id` permanently.
    ///
    /// The identifier is retired: it is never handed out again, and later
    /// operations addressing it fail with [`TaskStoreError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no record exists for `id`.
    pub fn delete(&mut self, id: TaskId) -> TaskStoreResult<()> {
        self.tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskStoreError::NotFound(id))
    }

    /// Returns copies of the current records in insertion order.
    ///
    /// With `include_completed` set to `false`, completed records are
    /// filtered out; relative order of the survivors is preserved. The
    /// result is a snapshot taken at call time, not a live view.
    #[must_use]
    pub fn list(&self, include_completed: bool) -> Vec<Task> {
        self.tasks
            .values()
            .filter(|task| include_completed || !task.completed())
            .cloned()
            .collect()
    }

    /// Marks the record for `id` completed and returns a copy of it.
    ///
    /// Idempotent: completing an already-completed task succeeds and leaves
    /// it completed. The transition is one-way; no operation reopens a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no record exists for `id`.
    pub fn mark_completed(&mut self, id: TaskId) -> TaskStoreResult<Task> {
        let task = self
            .tasks
            .get_mut(&id)
            .ok_or(TaskStoreError::NotFound(id))?;
        task.complete();
        Ok(task.clone())
    }

    /// Returns the number of current records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
