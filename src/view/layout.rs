//! Screen layout: header, tab bar, active tab, status bar, overlay.

use super::constants::{HEADER_HEIGHT, STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT};
use super::styles::{KEY_HINT, MUTED_TEXT};
use super::{help, logger, overlays, progress, tabs, today};
use crate::state::{AppState, Overlay, Tab};
use chrono::{DateTime, TimeZone};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render one full frame for `state` at `now`.
pub fn render_layout<Tz: TimeZone>(frame: &mut Frame, state: &AppState, now: &DateTime<Tz>)
where
    Tz::Offset: std::fmt::Display,
{
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state, now);
    tabs::render_tab_bar(frame, chunks[1], state.tab);

    match state.tab {
        Tab::Logger => logger::render_logger(frame, chunks[2], state, &now.timezone()),
        Tab::Today => today::render_today(frame, chunks[2], state, now),
        Tab::Progress => progress::render_progress(frame, chunks[2], state, now),
    }

    render_status_bar(frame, chunks[3], state);

    match &state.overlay {
        Overlay::None => {}
        Overlay::Help { scroll } => help::render_help_overlay(frame, *scroll),
        Overlay::AddExercise(form) => overlays::render_exercise_form(frame, form, state.units, now),
        Overlay::AddSet(form) => overlays::render_set_form(frame, form, state.units),
        Overlay::Library(picker) => overlays::render_library(frame, picker),
        Overlay::History(view) => {
            overlays::render_history(frame, view, state.log(), state.units, &now.timezone())
        }
    }
}

fn render_header<Tz: TimeZone>(frame: &mut Frame, area: Rect, state: &AppState, now: &DateTime<Tz>)
where
    Tz::Offset: std::fmt::Display,
{
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(area);
    let title = format!(
        " liftlog · {} exercises · units: {}",
        state.log().len(),
        state.units
    );
    frame.render_widget(
        Paragraph::new(Line::from(title)).style(Style::default().fg(Color::Cyan)),
        halves[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(format!("{} ", now.format("%a %-d %b %Y %H:%M"))))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Right),
        halves[1],
    );
}

/// Key hints for the current tab and overlay.
fn build_keyboard_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    match &state.overlay {
        Overlay::None => {}
        Overlay::Help { .. } => return vec![("j/k", "scroll"), ("Esc", "close")],
        Overlay::AddExercise(_) | Overlay::AddSet(_) => {
            return vec![("Tab", "field"), ("Enter", "save"), ("Esc", "cancel")]
        }
        Overlay::Library(_) => {
            return vec![("h/l", "filter"), ("Enter", "log"), ("Esc", "close")]
        }
        Overlay::History(_) => {
            return vec![("arrows", "day"), ("h/l", "month"), ("Esc", "close")]
        }
    }

    let mut hints = vec![("Tab", "switch tab")];
    if state.tab == Tab::Logger {
        hints.extend([
            ("a", "add"),
            ("s", "set"),
            ("Enter", "expand"),
            ("d/x", "delete"),
        ]);
    }
    hints.extend([
        ("b", "library"),
        ("c", "history"),
        ("u", "units"),
        ("?", "help"),
        ("q", "quit"),
    ]);
    hints
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = Vec::new();
    for (key, desc) in build_keyboard_hints(state) {
        spans.push(Span::styled(format!(" {key}"), KEY_HINT));
        spans.push(Span::styled(format!(" {desc} "), MUTED_TEXT));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
