//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations and render sink updates into use-case APIs.
//! - Keep FFI/CLI hosts decoupled from store and derivation details.

pub mod task_binder;
