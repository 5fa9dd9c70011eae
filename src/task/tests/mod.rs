//! Unit tests for the task domain and store.
