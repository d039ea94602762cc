//! Shared styles.
//!
//! Colour is only ever a second channel: every highlighted element also
//! differs in text (a marker, a sign, a label).

use crate::model::Trend;
use ratatui::style::{Color, Modifier, Style};

/// Section headings inside panels.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Secondary text (hints, empty states).
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Key names in help and the status bar.
pub const KEY_HINT: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Selected row or chip.
pub const SELECTED: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

/// Focused form field.
pub const FOCUSED_FIELD: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Active (trained) body part.
pub const ACTIVE_PART: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Popup borders.
pub const POPUP_BORDER: Style = Style::new().fg(Color::Cyan);

/// Bars in the weekly volume chart.
pub const BAR: Style = Style::new().fg(Color::Magenta);

/// Colour for a week-over-week trend.
pub fn trend_style(trend: Trend) -> Style {
    match trend {
        Trend::Up => Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
        Trend::Down => Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
        Trend::Flat => Style::new().fg(Color::Gray),
    }
}
