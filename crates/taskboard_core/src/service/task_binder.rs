//! Task store to view binding.
//!
//! # Responsibility
//! - Apply add/toggle/delete/filter operations to the owned `TaskStore`.
//! - Push every state change to the render sink so the display matches.
//! - Dispatch host input events to the operations above.
//!
//! # Invariants
//! - After `set_filter`, the display equals the filtered view in order.
//! - Empty-state visibility always follows the full collection.
//! - Toggle updates the element in place and does not re-run the filter.
//! - Invalid input (blank text, unknown id) changes neither state nor view.

use crate::model::task::{TaskFilter, TaskId};
use crate::store::task_store::TaskStore;
use crate::view::event::{classify_click, ListIntent, UiEvent, SUBMIT_KEY};
use crate::view::sink::{RenderSink, RenderedItem};
use log::debug;

/// Owns one session's task state and keeps a render sink in sync with it.
pub struct TaskBinder<S: RenderSink> {
    store: TaskStore,
    sink: S,
}

impl<S: RenderSink> TaskBinder<S> {
    /// Creates an empty board and performs the initial render.
    pub fn new(sink: S) -> Self {
        Self::with_store(TaskStore::new(), sink)
    }

    /// Binds an existing store to `sink` and renders its current view.
    pub fn with_store(store: TaskStore, sink: S) -> Self {
        let mut binder = Self { store, sink };
        binder.render_filtered();
        debug!(
            "event=binder_init module=binder status=ok tasks={} filter={}",
            binder.store.len(),
            binder.store.current_filter()
        );
        binder
    }

    /// Adds a task from raw entry text.
    ///
    /// # Contract
    /// - Blank text is ignored: no task, no render, entry left as is.
    /// - The new task is appended to the display only when it matches the
    ///   current filter.
    /// - The entry field is cleared on success.
    pub fn add(&mut self, raw_text: &str) -> Option<TaskId> {
        let Some(id) = self.store.add(raw_text) else {
            debug!("event=task_add module=binder status=ignored reason=rejected");
            return None;
        };

        if let Some(task) = self.store.get(id) {
            if task.matches(self.store.current_filter()) {
                self.sink.append_item(&RenderedItem::from(task));
            }
        }
        self.sink.clear_entry();
        self.update_empty_state();
        debug!(
            "event=task_add module=binder status=ok id={id} total={}",
            self.store.len()
        );
        Some(id)
    }

    /// Flips completion of `id` and updates its displayed marker.
    pub fn toggle_status(&mut self, id: TaskId) -> Option<bool> {
        let Some(completed) = self.store.toggle(id) else {
            debug!("event=task_toggle module=binder status=ignored reason=not_found id={id}");
            return None;
        };
        self.sink.set_item_state(id, completed);
        debug!("event=task_toggle module=binder status=ok id={id} completed={completed}");
        Some(completed)
    }

    /// Removes `id` from state and display.
    pub fn delete(&mut self, id: TaskId) -> bool {
        if self.store.delete(id).is_none() {
            debug!("event=task_delete module=binder status=ignored reason=not_found id={id}");
            return false;
        }
        self.sink.remove_item(id);
        self.update_empty_state();
        debug!(
            "event=task_delete module=binder status=ok id={id} total={}",
            self.store.len()
        );
        true
    }

    /// Selects `filter` and re-renders the whole list.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.store.set_filter(filter);
        self.render_filtered();
        debug!("event=filter_set module=binder status=ok filter={filter}");
    }

    /// Selects a filter from its raw control value; unknown values mean `All`.
    pub fn set_filter_value(&mut self, value: &str) {
        self.set_filter(TaskFilter::from_control_value(value));
    }

    /// Routes one host event to the matching operation.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::AddClicked { entry_text } => {
                self.add(&entry_text);
            }
            UiEvent::EntryKeyPressed { key, entry_text } => {
                if key == SUBMIT_KEY {
                    self.add(&entry_text);
                }
            }
            UiEvent::FilterClicked { value } => self.set_filter_value(&value),
            UiEvent::ListClicked(origin) => self.dispatch(classify_click(origin)),
        }
    }

    fn dispatch(&mut self, intent: ListIntent) {
        match intent {
            ListIntent::Toggle(id) => {
                self.toggle_status(id);
            }
            ListIntent::Delete(id) => {
                self.delete(id);
            }
            ListIntent::None => {}
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Releases the store and sink.
    pub fn into_parts(self) -> (TaskStore, S) {
        (self.store, self.sink)
    }

    fn render_filtered(&mut self) {
        let filter = self.store.current_filter();
        self.sink.set_filter_active(filter);
        let items = self
            .store
            .visible_tasks()
            .into_iter()
            .map(RenderedItem::from)
            .collect::<Vec<_>>();
        self.sink.render_list(&items);
        self.update_empty_state();
    }

    fn update_empty_state(&mut self) {
        self.sink
            .set_empty_visible(self.store.is_empty_state_visible());
    }
}
