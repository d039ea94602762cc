//! Acceptance Test Harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend, FixedOffset>` with a fixed clock and helpers
//! for simulating user interactions.

use crate::config::keybindings::KeyBindings;
use crate::model::import::load_import;
use crate::model::{ExerciseLog, ImportError};
use crate::state::AppState;
use crate::view::{buffer_to_string, TuiApp};
use chrono::{DateTime, FixedOffset, TimeZone};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::Path;

/// Wednesday 14 October 2026, 18:30 at UTC+1.
pub fn harness_now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(3600)
        .unwrap()
        .with_ymd_and_hms(2026, 10, 14, 18, 30, 0)
        .unwrap()
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend, FixedOffset>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Empty log, 100x30 terminal.
    pub fn new() -> Self {
        Self::with_log(ExerciseLog::new(), 100, 30)
    }

    /// Start from an existing log with a custom terminal size.
    pub fn with_log(log: ExerciseLog, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let app = TuiApp::new_for_test(
            terminal,
            AppState::new(log),
            KeyBindings::default(),
            Box::new(harness_now),
        );
        Self { app, running: true }
    }

    /// Load an import fixture.
    pub fn from_import_fixture(path: &str) -> Result<Self, ImportError> {
        let log = load_import(Path::new(path))?;
        Ok(Self::with_log(log, 100, 30))
    }

    /// Send a single key event. Returns true if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }
        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text one character at a time.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Whether the app is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render one frame and return the screen text.
    pub fn render_to_string(&mut self) -> String {
        self.app.render_test().unwrap();
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
