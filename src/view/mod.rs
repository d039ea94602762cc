//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod helpers;
mod layout;
mod logger;
mod overlays;
mod progress;
mod styles;
pub mod tabs;
mod today;

pub use help::render_help_overlay;
pub use helpers::{centered_rect, format_mass};
pub use layout::render_layout;

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::ExerciseLog;
use crate::state::{self, AppState};
use chrono::{DateTime, Local, TimeZone};
use constants::TICK_MILLIS;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, buffer::Buffer, Terminal};
use std::fmt::Display;
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Source of the current time.
pub type Clock<Tz> = Box<dyn Fn() -> DateTime<Tz>>;

/// Main TUI application
///
/// Generic over backend and time zone so tests can drive it with
/// `TestBackend` and a fixed clock.
pub struct TuiApp<B, Tz>
where
    B: ratatui::backend::Backend,
    Tz: TimeZone,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    clock: Clock<Tz>,
}

impl TuiApp<CrosstermBackend<Stdout>, Local> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            clock: Box::new(Local::now),
        })
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Redraws after every key press, on resize,
    /// and once per tick so the clocks stay current.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let tick = Duration::from_millis(TICK_MILLIS);

        self.draw()?;

        loop {
            if event::poll(tick)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            info!("Quit requested");
                            return Ok(());
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                    }
                    _ => continue,
                }
            }
            self.draw()?;
        }
    }
}

impl<B, Tz> TuiApp<B, Tz>
where
    B: ratatui::backend::Backend,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    /// Handle a key press. Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let now = (self.clock)();
        self.app_state =
            state::handle_key(self.app_state.clone(), key, &self.key_bindings, &now);
        self.app_state.should_quit
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let now = (self.clock)();
        let app_state = &self.app_state;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, app_state, &now);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
#[allow(dead_code)]
impl<B, Tz> TuiApp<B, Tz>
where
    B: ratatui::backend::Backend,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    /// Build an app around an existing terminal and clock, skipping raw mode.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        clock: Clock<Tz>,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            clock,
        }
    }

    /// Get reference to app state
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event. Returns true if the app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Render a single frame to the backend.
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal, for buffer inspection.
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Flatten a buffer into text, one line per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Initialize and run the TUI application.
///
/// Logging must be initialized by the caller. The terminal is restored even
/// when the event loop fails.
pub fn run(config: &ResolvedConfig, log: ExerciseLog) -> Result<(), TuiError> {
    let app_state = AppState::new(log)
        .with_tab(config.start_tab)
        .with_units(config.units)
        .with_defaults(config.form_defaults());

    info!(tab = %config.start_tab, units = %config.units, "Starting TUI");
    let result = TuiApp::new(app_state).and_then(|mut app| app.run());

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
