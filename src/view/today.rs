//! Today tab: stat tiles, muscles trained, and today's exercises.

use super::constants::TODAY_STATS_HEIGHT;
use super::helpers::format_mass;
use super::styles::{ACTIVE_PART, MUTED_TEXT, SECTION_HEADER};
use crate::model::{stats::exercises_in, BodyPart, TodaySummary, WeightUnit};
use crate::state::AppState;
use chrono::{DateTime, TimeZone};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the Today tab for the local day containing `now`.
pub fn render_today<Tz: TimeZone>(frame: &mut Frame, area: Rect, state: &AppState, now: &DateTime<Tz>)
where
    Tz::Offset: std::fmt::Display,
{
    let summary = TodaySummary::compute(state.log(), now);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TODAY_STATS_HEIGHT),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    render_stat_tiles(frame, chunks[0], &summary, state.units);
    render_active_parts(frame, chunks[1], &summary);
    render_today_list(frame, chunks[2], state, &summary, &now.timezone());
}

fn render_stat_tiles(frame: &mut Frame, area: Rect, summary: &TodaySummary, units: WeightUnit) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let values = [
        ("Exercises", summary.exercises.to_string()),
        ("Sets", summary.sets.to_string()),
        ("Volume", format_mass(summary.volume, units)),
    ];

    for (tile, (title, value)) in tiles.iter().zip(values) {
        let paragraph = Paragraph::new(vec![Line::from(""), Line::styled(value, SECTION_HEADER)])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {title} ")),
            );
        frame.render_widget(paragraph, *tile);
    }
}

/// One chip per body part; trained parts get a filled marker as well as colour.
fn render_active_parts(frame: &mut Frame, area: Rect, summary: &TodaySummary) {
    let mut spans = Vec::new();
    for part in BodyPart::ALL {
        if summary.is_active(part) {
            spans.push(Span::styled(format!("● {part}  "), ACTIVE_PART));
        } else {
            spans.push(Span::styled(format!("○ {part}  "), MUTED_TEXT));
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Muscles trained "),
        ),
        area,
    );
}

fn render_today_list<Tz: TimeZone>(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    summary: &TodaySummary,
    tz: &Tz,
) where
    Tz::Offset: std::fmt::Display,
{
    let exercises = exercises_in(state.log(), &summary.window);
    let lines: Vec<Line> = if exercises.is_empty() {
        vec![Line::styled("Nothing logged today.", MUTED_TEXT)]
    } else {
        exercises
            .iter()
            .map(|e| {
                Line::from(format!(
                    " {}  {}  [{}]  {} sets · {}",
                    e.logged_at().with_timezone(tz).format("%H:%M"),
                    e.name(),
                    e.body_part(),
                    e.sets().len(),
                    format_mass(e.volume(), state.units)
                ))
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", summary.window.date.format("%A %-d %B"))),
        ),
        area,
    );
}
