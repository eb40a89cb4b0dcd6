//! Host input events and list click classification.
//!
//! # Responsibility
//! - Model the user events a host delivers to the binder.
//! - Classify list clicks into an intent before any dispatch happens.
//!
//! # Invariants
//! - A click on a delete control never classifies as a toggle.
//! - A click outside any task element classifies as `ListIntent::None`.

use crate::model::task::TaskId;

/// Key name that submits the entry field.
pub const SUBMIT_KEY: &str = "Enter";

/// Where a click inside the list region originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOrigin {
    /// Id of the enclosing task element, if the click landed inside one.
    pub item_id: Option<TaskId>,
    /// Whether the click landed on (or inside) the element's delete control.
    pub on_delete_control: bool,
}

impl ClickOrigin {
    /// Click on a task element body.
    pub fn item_body(id: TaskId) -> Self {
        Self {
            item_id: Some(id),
            on_delete_control: false,
        }
    }

    /// Click on a task element's delete control.
    pub fn delete_control(id: TaskId) -> Self {
        Self {
            item_id: Some(id),
            on_delete_control: true,
        }
    }

    /// Click on list background, outside every task element.
    pub fn background() -> Self {
        Self {
            item_id: None,
            on_delete_control: false,
        }
    }
}

/// What a list click asks the binder to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListIntent {
    Toggle(TaskId),
    Delete(TaskId),
    None,
}

/// Classifies a list click. Delete is checked before toggle.
pub fn classify_click(origin: ClickOrigin) -> ListIntent {
    match origin {
        ClickOrigin { item_id: None, .. } => ListIntent::None,
        ClickOrigin {
            item_id: Some(id),
            on_delete_control: true,
        } => ListIntent::Delete(id),
        ClickOrigin {
            item_id: Some(id),
            on_delete_control: false,
        } => ListIntent::Toggle(id),
    }
}

/// User input delivered by the host, in delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The add control was activated.
    AddClicked { entry_text: String },
    /// A key was pressed while the entry field had focus.
    EntryKeyPressed { key: String, entry_text: String },
    /// A filter control was activated; `value` is its raw control value.
    FilterClicked { value: String },
    /// A click inside the list region.
    ListClicked(ClickOrigin),
}
