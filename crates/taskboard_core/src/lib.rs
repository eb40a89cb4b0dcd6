//! Core task list logic for Taskboard.
//! This crate owns task state and keeps any render target in sync with it.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskFilter, TaskId, TaskValidationError};
pub use service::task_binder::TaskBinder;
pub use store::task_store::{filter_tasks_by_status, TaskStore};
pub use view::event::{classify_click, ClickOrigin, ListIntent, UiEvent, SUBMIT_KEY};
pub use view::sink::{RenderSink, RenderedItem};
pub use view::snapshot::ViewModelSink;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
