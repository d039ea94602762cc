//! Logger tab: the exercise list with expandable sets.

use super::constants::NAME_MAX_WIDTH;
use super::helpers::{format_mass, truncate_to_width};
use super::styles::{MUTED_TEXT, SELECTED};
use crate::model::ExerciseEntry;
use crate::state::forms::format_weight;
use crate::state::AppState;
use chrono::TimeZone;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const EMPTY_HINT: &str = "No exercises yet. Press a to add one or b to browse the library.";

/// Render the exercise list. Times are shown in `tz`.
pub fn render_logger<Tz: TimeZone>(frame: &mut Frame, area: Rect, state: &AppState, tz: &Tz)
where
    Tz::Offset: std::fmt::Display,
{
    let exercises = state.log().exercises();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Exercises ({}) ", exercises.len()));

    if exercises.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(EMPTY_HINT, MUTED_TEXT)).block(block),
            area,
        );
        return;
    }

    let (lines, cursor_line) = build_lines(state, tz);
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = cursor_line.saturating_sub(visible.saturating_sub(1));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .scroll((scroll as u16, 0)),
        area,
    );
}

/// All list lines plus the line index of the selected row.
fn build_lines<Tz: TimeZone>(state: &AppState, tz: &Tz) -> (Vec<Line<'static>>, usize)
where
    Tz::Offset: std::fmt::Display,
{
    let mut lines = Vec::new();
    let mut cursor_line = 0;

    for (index, exercise) in state.log().exercises().iter().enumerate() {
        let selected = index == state.cursor;
        let expanded = state.is_expanded(exercise.id());
        if selected {
            cursor_line = lines.len();
        }
        lines.push(exercise_line(exercise, selected, expanded, state, tz));

        if expanded {
            if exercise.sets().is_empty() {
                lines.push(Line::styled("      no sets yet, press s to add one", MUTED_TEXT));
            }
            for (set_index, set) in exercise.sets().iter().enumerate() {
                let marker = if selected && set_index == state.set_cursor {
                    "›"
                } else {
                    " "
                };
                let text = format!(
                    "    {} {}. {} × {} {}",
                    marker,
                    exercise.sets().len() - set_index,
                    set.reps(),
                    format_weight(set.weight()),
                    state.units.suffix()
                );
                let style = if selected && set_index == state.set_cursor {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                lines.push(Line::styled(text, style));
            }
        }
    }

    (lines, cursor_line)
}

fn exercise_line<Tz: TimeZone>(
    exercise: &ExerciseEntry,
    selected: bool,
    expanded: bool,
    state: &AppState,
    tz: &Tz,
) -> Line<'static>
where
    Tz::Offset: std::fmt::Display,
{
    let arrow = if expanded { "▼" } else { "▶" };
    let time = exercise.logged_at().with_timezone(tz).format("%a %H:%M");
    let summary = format!(
        " {} {}  [{}]  {} sets · {}  {}",
        arrow,
        truncate_to_width(exercise.name(), NAME_MAX_WIDTH),
        exercise.body_part(),
        exercise.sets().len(),
        format_mass(exercise.volume(), state.units),
        time
    );
    if selected {
        Line::from(Span::styled(summary, SELECTED))
    } else {
        Line::from(summary)
    }
}
