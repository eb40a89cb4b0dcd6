//! Session task state.
//!
//! # Responsibility
//! - Own the task collection and current filter as plain data.
//! - Stay independent of any render target so it can be tested alone.

pub mod task_store;
