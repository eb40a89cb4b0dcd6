//! View boundary between task state and a host display.
//!
//! # Responsibility
//! - Define the render sink capability and rendered item shape.
//! - Model host input events and classify list clicks.
//! - Provide an in-memory sink for hosts that read state back.

pub mod event;
pub mod sink;
pub mod snapshot;
