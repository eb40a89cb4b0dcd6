//! Domain model for the task list.
//!
//! # Responsibility
//! - Define canonical data structures used by the store and the binder.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion removes a task outright; there are no tombstones.

pub mod task;
