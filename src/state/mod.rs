//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod forms;
pub mod history;
pub mod key_handler;
pub mod library_picker;

// Re-export for convenience
pub use app_state::{AppState, Overlay, Tab, UnknownTab};
pub use forms::{ExerciseField, ExerciseForm, FormDefaults, SetField, SetForm};
pub use history::HistoryView;
pub use key_handler::{handle_action, handle_key};
pub use library_picker::LibraryPicker;
