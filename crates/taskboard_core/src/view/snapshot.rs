//! In-memory render target.
//!
//! Mirrors what a host document would display as plain data, so FFI and
//! terminal hosts (and tests) can read the rendered state back.

use crate::model::task::{TaskFilter, TaskId};
use crate::view::sink::{RenderSink, RenderedItem};
use serde::Serialize;

/// Render sink that records the displayed state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewModelSink {
    pub items: Vec<RenderedItem>,
    pub empty_visible: bool,
    /// `None` until the binder marks a control active.
    pub active_filter: Option<TaskFilter>,
    /// Number of times the entry field was cleared.
    pub entry_cleared: u32,
}

impl ViewModelSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Displayed task texts, in display order.
    pub fn displayed_texts(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.text.as_str()).collect()
    }

    pub fn is_filter_active(&self, filter: TaskFilter) -> bool {
        self.active_filter == Some(filter)
    }

    pub fn item(&self, id: TaskId) -> Option<&RenderedItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl RenderSink for ViewModelSink {
    fn render_list(&mut self, items: &[RenderedItem]) {
        self.items = items.to_vec();
    }

    fn append_item(&mut self, item: &RenderedItem) {
        self.items.push(item.clone());
    }

    fn set_item_state(&mut self, id: TaskId, completed: bool) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.completed = completed;
        }
    }

    fn remove_item(&mut self, id: TaskId) {
        self.items.retain(|item| item.id != id);
    }

    fn set_empty_visible(&mut self, visible: bool) {
        self.empty_visible = visible;
    }

    fn set_filter_active(&mut self, filter: TaskFilter) {
        self.active_filter = Some(filter);
    }

    fn clear_entry(&mut self) {
        self.entry_cleared = self.entry_cleared.saturating_add(1);
    }
}
