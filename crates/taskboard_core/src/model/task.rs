//! Task domain model.
//!
//! # Responsibility
//! - Define the task record shown in the list and its stable identifier.
//! - Define the status filter applied when deriving the visible list.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes.
//! - `text` is trimmed and never empty.
//! - `completed` is the only mutable field.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for one task within a session.
///
/// Values are epoch-millisecond based and strictly increasing per store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parses an id from its rendered string form.
    ///
    /// Returns `None` for blank or non-numeric input.
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse::<u64>().ok().map(Self)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors for task construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty after trimming.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be blank"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    text: String,
    pub completed: bool,
}

impl Task {
    /// Creates an open task from raw entry text.
    ///
    /// # Errors
    /// - Returns `TaskValidationError::EmptyText` when `raw_text` is blank.
    pub fn new(id: TaskId, raw_text: &str) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            text: raw_text.trim().to_string(),
            completed: false,
        };
        task.validate()?;
        Ok(task)
    }

    /// Task text as entered, trimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Checks model invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }

    /// Flips completion state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    /// Whether this task belongs to the given filter's view.
    pub fn matches(&self, filter: TaskFilter) -> bool {
        match filter {
            TaskFilter::All => true,
            TaskFilter::Active => !self.completed,
            TaskFilter::Completed => self.completed,
        }
    }
}

#[derive(Deserialize)]
struct TaskWire {
    id: TaskId,
    text: String,
    #[serde(default)]
    completed: bool,
}

impl<'de> Deserialize<'de> for Task {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = TaskWire::deserialize(deserializer)?;
        let mut task = Task::new(wire.id, &wire.text).map_err(serde::de::Error::custom)?;
        task.completed = wire.completed;
        Ok(task)
    }
}

/// Visibility criterion for the displayed list.
///
/// Affects display only, never stored task state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

/// Control value for the "all" filter.
pub const FILTER_VALUE_ALL: &str = "all";
/// Control value for the "active" filter.
pub const FILTER_VALUE_ACTIVE: &str = "active";
/// Control value for the "completed" filter.
pub const FILTER_VALUE_COMPLETED: &str = "completed";

impl TaskFilter {
    /// The three filter controls, in display order.
    pub const CONTROLS: [TaskFilter; 3] = [Self::All, Self::Active, Self::Completed];

    /// Stable control value string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => FILTER_VALUE_ALL,
            Self::Active => FILTER_VALUE_ACTIVE,
            Self::Completed => FILTER_VALUE_COMPLETED,
        }
    }

    /// Maps a raw control value to a filter.
    ///
    /// Unrecognized values fall back to `All`.
    pub fn from_control_value(value: &str) -> Self {
        match value.trim() {
            FILTER_VALUE_ACTIVE => Self::Active,
            FILTER_VALUE_COMPLETED => Self::Completed,
            _ => Self::All,
        }
    }
}

impl Display for TaskFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
