//! In-memory task collection and filter state.
//!
//! # Responsibility
//! - Hold the authoritative ordered task list for one session.
//! - Apply add/toggle/delete mutations and track the current filter.
//! - Derive the filtered view without touching any render target.
//!
//! # Invariants
//! - Task ids are unique and strictly increasing in insertion order.
//! - Insertion order is preserved by every operation.
//! - Missing ids, blank text and id exhaustion are no-ops, never errors.

use crate::model::task::{Task, TaskFilter, TaskId};
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the subsequence of `tasks` visible under `filter`.
///
/// Relative order is preserved for every filter.
pub fn filter_tasks_by_status(tasks: &[Task], filter: TaskFilter) -> Vec<&Task> {
    tasks.iter().filter(|task| task.matches(filter)).collect()
}

/// Hands out creation-time based ids that never repeat.
///
/// Returns `None` once `u64::MAX` has been handed out.
#[derive(Debug, Default)]
struct TaskIdAllocator {
    last: Option<u64>,
}

impl TaskIdAllocator {
    fn next_id(&mut self) -> Option<TaskId> {
        let now = now_epoch_ms();
        let raw = match self.last {
            Some(last) if now <= last => last.checked_add(1)?,
            _ => now,
        };
        self.last = Some(raw);
        Some(TaskId::new(raw))
    }
}

fn now_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Owned task state for one board session.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: TaskFilter,
    ids: TaskIdAllocator,
}

impl TaskStore {
    /// Creates an empty store with the `All` filter selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task built from raw entry text.
    ///
    /// Returns `None` and leaves the store untouched when the trimmed text
    /// is empty or the id space is exhausted.
    pub fn add(&mut self, raw_text: &str) -> Option<TaskId> {
        if raw_text.trim().is_empty() {
            return None;
        }
        let task = Task::new(self.ids.next_id()?, raw_text).ok()?;
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    /// Flips completion for `id`, returning the new state.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .map(Task::toggle)
    }

    /// Removes the task with `id`, returning it.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    pub fn current_filter(&self) -> TaskFilter {
        self.filter
    }

    /// Tasks visible under the current filter, in insertion order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        filter_tasks_by_status(&self.tasks, self.filter)
    }

    /// Full collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Empty-state indicator follows the full collection, not the view.
    pub fn is_empty_state_visible(&self) -> bool {
        self.is_empty()
    }
}
