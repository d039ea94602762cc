//! Help overlay listing keyboard shortcuts.
//!
//! Triggered by '?', dismissed by 'Esc', 'q' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::centered_rect;
use super::styles::{KEY_HINT, MUTED_TEXT, POPUP_BORDER, SECTION_HEADER};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centred on the screen, scrolled by `scroll_offset` lines.
pub fn render_help_overlay(frame: &mut Frame, scroll_offset: u16) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(POPUP_BORDER),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left)
        .scroll((scroll_offset, 0));

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        MUTED_TEXT.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Tabs",
        &[
            ("Tab / ]", "Next tab"),
            ("Shift+Tab / [", "Previous tab"),
            ("1 2 3", "Logger, Today, Progress"),
        ],
    ),
    (
        "Logger",
        &[
            ("j/↓  k/↑", "Move between exercises"),
            ("Enter/Space", "Expand or collapse sets"),
            ("n  p", "Next / previous set"),
            ("a", "Add exercise"),
            ("s", "Add set to selected exercise"),
            ("d", "Delete selected exercise"),
            ("x", "Delete selected set"),
        ],
    ),
    (
        "Forms",
        &[
            ("Tab/↓  Shift+Tab/↑", "Next / previous field"),
            ("←  →", "Cycle body part or exercise"),
            ("Enter", "Save"),
            ("Esc", "Cancel"),
        ],
    ),
    (
        "Anywhere",
        &[
            ("b", "Exercise library"),
            ("c", "Workout history calendar"),
            ("u", "Toggle kg / lbs"),
            ("?", "This help"),
            ("q / Ctrl+c", "Quit"),
        ],
    ),
];

fn build_help_content() -> Vec<Line<'static>> {
    let desc_style = Style::default().fg(Color::White);
    let mut lines = Vec::new();

    for (index, (title, keys)) in SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::styled(*title, SECTION_HEADER));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<20}"), KEY_HINT),
                Span::styled(*desc, desc_style),
            ]));
        }
    }

    lines
}
