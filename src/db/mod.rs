//! Persistence layer for the kanbo application.
//!
//! Everything is backed by a single flat key-value storage file. The task
//! list is one serialized value; boards are derived from it rather than
//! stored; the active board and the UI flags are small string values in
//! the same namespace. Every mutation rewrites the affected value whole.

/// Flat key-value storage file and its key namespace.
pub mod store;

/// Task CRUD over the serialized task list.
pub mod tasks;

/// Board derivation and persisted active-board selection.
pub mod boards;
