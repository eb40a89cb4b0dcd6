//! Render sink capability.
//!
//! # Responsibility
//! - Describe the display operations the binder needs from a host.
//! - Keep store/derivation logic free of any concrete render target.
//!
//! # Invariants
//! - Implementations ignore ids they are not displaying.
//! - `render_list` replaces the whole displayed list.

use crate::model::task::{Task, TaskFilter, TaskId};
use serde::{Deserialize, Serialize};

/// Display data for one rendered task element.
///
/// A host shows `text`, marks the element completed when `completed` is
/// set, and exposes a delete control plus a toggle click-target keyed by
/// `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedItem {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl From<&Task> for RenderedItem {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text().to_string(),
            completed: task.completed,
        }
    }
}

/// Display operations driven by `TaskBinder`.
pub trait RenderSink {
    /// Clears the list and renders `items` in order.
    fn render_list(&mut self, items: &[RenderedItem]);
    /// Appends one element at the end of the list.
    fn append_item(&mut self, item: &RenderedItem);
    /// Updates the completed marker of a displayed element.
    fn set_item_state(&mut self, id: TaskId, completed: bool);
    /// Removes a displayed element.
    fn remove_item(&mut self, id: TaskId);
    fn set_empty_visible(&mut self, visible: bool);
    /// Marks `filter`'s control active and every other control inactive.
    fn set_filter_active(&mut self, filter: TaskFilter);
    /// Clears the text entry field.
    fn clear_entry(&mut self);
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn render_list(&mut self, items: &[RenderedItem]) {
        (**self).render_list(items);
    }

    fn append_item(&mut self, item: &RenderedItem) {
        (**self).append_item(item);
    }

    fn set_item_state(&mut self, id: TaskId, completed: bool) {
        (**self).set_item_state(id, completed);
    }

    fn remove_item(&mut self, id: TaskId) {
        (**self).remove_item(id);
    }

    fn set_empty_visible(&mut self, visible: bool) {
        (**self).set_empty_visible(visible);
    }

    fn set_filter_active(&mut self, filter: TaskFilter) {
        (**self).set_filter_active(filter);
    }

    fn clear_entry(&mut self) {
        (**self).clear_entry();
    }
}
