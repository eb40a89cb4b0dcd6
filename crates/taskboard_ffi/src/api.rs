//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the board operations to Dart via FRB as sync calls.
//! - Own the single process-wide board session for the UI host.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every board call returns the full rendered view after the operation.
//! - Malformed ids and blank text are ignored, never reported as errors.

use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};
use taskboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ClickOrigin, RenderedItem, TaskBinder, TaskId, UiEvent, ViewModelSink,
};

static BOARD: OnceLock<Mutex<TaskBinder<ViewModelSink>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One displayed task element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardItem {
    /// Stable task ID in string form; pass back to toggle/delete.
    pub task_id: String,
    pub text: String,
    pub completed: bool,
}

/// Rendered board state returned by every board call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Displayed items in display order.
    pub items: Vec<BoardItem>,
    /// Whether the empty-state indicator is shown.
    pub empty_visible: bool,
    /// Control value (`all|active|completed`) of the active filter.
    pub active_filter: String,
    /// Incremented each time the host should clear its entry field.
    pub entry_cleared: u32,
}

/// Discards the current session and starts an empty board.
///
/// This is the explicit initialization point; other board calls create
/// the session lazily when it does not exist yet.
#[flutter_rust_bridge::frb(sync)]
pub fn board_reset() -> BoardView {
    let mut board = lock_board();
    *board = TaskBinder::new(ViewModelSink::new());
    to_board_view(board.sink())
}

/// Returns the current rendered view without changing state.
#[flutter_rust_bridge::frb(sync)]
pub fn board_view() -> BoardView {
    let board = lock_board();
    to_board_view(board.sink())
}

/// Add control activated with the entry field content.
#[flutter_rust_bridge::frb(sync)]
pub fn board_add(entry_text: String) -> BoardView {
    with_board(UiEvent::AddClicked { entry_text })
}

/// Key pressed in the entry field; only `Enter` submits.
#[flutter_rust_bridge::frb(sync)]
pub fn board_entry_key(key: String, entry_text: String) -> BoardView {
    with_board(UiEvent::EntryKeyPressed { key, entry_text })
}

/// Task element body activated.
#[flutter_rust_bridge::frb(sync)]
pub fn board_toggle(task_id: String) -> BoardView {
    match TaskId::parse(&task_id) {
        Some(id) => with_board(UiEvent::ListClicked(ClickOrigin::item_body(id))),
        None => board_view(),
    }
}

/// Task element delete control activated.
#[flutter_rust_bridge::frb(sync)]
pub fn board_delete(task_id: String) -> BoardView {
    match TaskId::parse(&task_id) {
        Some(id) => with_board(UiEvent::ListClicked(ClickOrigin::delete_control(id))),
        None => board_view(),
    }
}

/// Filter control activated with its raw control value.
///
/// Unrecognized values select `all`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_set_filter(value: String) -> BoardView {
    with_board(UiEvent::FilterClicked { value })
}

fn with_board(event: UiEvent) -> BoardView {
    let mut board = lock_board();
    board.handle(event);
    to_board_view(board.sink())
}

fn lock_board() -> MutexGuard<'static, TaskBinder<ViewModelSink>> {
    let board = BOARD.get_or_init(|| Mutex::new(TaskBinder::new(ViewModelSink::new())));
    board.lock().unwrap_or_else(|poisoned| {
        warn!("event=board_lock module=ffi status=recovered reason=poisoned");
        board.clear_poison();
        poisoned.into_inner()
    })
}

fn to_board_view(sink: &ViewModelSink) -> BoardView {
    BoardView {
        items: sink.items.iter().map(to_board_item).collect(),
        empty_visible: sink.empty_visible,
        active_filter: sink
            .active_filter
            .unwrap_or_default()
            .as_str()
            .to_string(),
        entry_cleared: sink.entry_cleared,
    }
}

fn to_board_item(item: &RenderedItem) -> BoardItem {
    BoardItem {
        task_id: item.id.to_string(),
        text: item.text.clone(),
        completed: item.completed,
    }
}
