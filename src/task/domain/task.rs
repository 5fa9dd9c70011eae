//! Task record and the request types that create and modify it.

use super::{TaskDomainError, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single to-do record.
///
/// Records are constructed only by the store, which allocates the
/// identifier. Field mutation goes through the store as well; values handed
/// out by the store are owned copies, so holding a `Task` never observes
/// later store mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
    completed: bool,
}

impl Task {
    /// Constructs a record from a validated creation request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::EmptyDescription`] when the corresponding request
    /// field is empty after trimming.
    pub fn from_request(id: TaskId, request: CreateTaskRequest) -> Result<Self, TaskDomainError> {
        ensure_non_empty(&request.title, TaskDomainError::EmptyTitle)?;
        ensure_non_empty(&request.description, TaskDomainError::EmptyDescription)?;

        Ok(Self {
            id,
            title: request.title,
            description: request.description,
            due_date: request.due_date,
            completed: false,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date, if one is set.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns whether the task has been marked completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Applies the supplied fields of an update request in place.
    ///
    /// Identity and completion state are never altered here. The request
    /// must have been validated first; this only copies values.
    pub(crate) fn apply_update(&mut self, request: UpdateTaskRequest) {
        if let Some(title) = request.title {
            self.title = title;
        }
        if let Some(description) = request.description {
            self.description = description;
        }
        match request.due_date {
            DueDateChange::Unchanged => {}
            DueDateChange::Set(date) => self.due_date = Some(date),
            DueDateChange::Clear => self.due_date = None,
        }
    }

    /// Marks the task completed. Idempotent.
    pub(crate) fn complete(&mut self) {
        self.completed = true;
    }
}

/// Request payload for creating a task.
///
/// The request itself is unvalidated; validation happens when the store
/// turns it into a record, so a rejected request has no observable effect on
/// the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
}

impl CreateTaskRequest {
    /// Creates a request with the required text fields and no due date.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: None,
        }
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets or leaves out the due date from an optional value.
    #[must_use]
    pub const fn with_optional_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }
}

/// Requested change to a task's due date.
///
/// A partial update must distinguish "leave the date alone" from "remove the
/// date", so a plain `Option` is not enough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DueDateChange {
    /// Keep whatever due date the record currently has.
    #[default]
    Unchanged,
    /// Replace the due date with the given value.
    Set(NaiveDate),
    /// Remove the due date.
    Clear,
}

/// Request payload for a partial task update.
///
/// Only the fields supplied through the builder methods are changed; the
/// updatable field set is fixed here rather than discovered dynamically.
/// Identity and completion state are not updatable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    due_date: DueDateChange,
}

impl UpdateTaskRequest {
    /// Creates an empty update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = DueDateChange::Set(due_date);
        self
    }

    /// Removes the due date.
    #[must_use]
    pub const fn with_due_date_cleared(mut self) -> Self {
        self.due_date = DueDateChange::Clear;
        self
    }

    /// Returns whether the request changes any field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date == DueDateChange::Unchanged
    }

    /// Validates the supplied fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::EmptyDescription`] when a supplied replacement is
    /// empty after trimming, so an update can never leave a record with
    /// empty required text.
    pub fn validate(&self) -> Result<(), TaskDomainError> {
        if let Some(title) = &self.title {
            ensure_non_empty(title, TaskDomainError::EmptyTitle)?;
        }
        if let Some(description) = &self.description {
            ensure_non_empty(description, TaskDomainError::EmptyDescription)?;
        }
        Ok(())
    }
}

/// Rejects text that is empty after trimming.
fn ensure_non_empty(value: &str, error: TaskDomainError) -> Result<(), TaskDomainError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(())
}
