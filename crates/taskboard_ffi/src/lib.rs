//! Flutter-facing bindings for the Taskboard core.

pub mod api;
