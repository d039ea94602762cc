//! Popups drawn above the active tab: the two forms, the library and the
//! history calendar.

use super::constants::{FORM_POPUP_HEIGHT_PERCENT, FORM_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, format_mass, key_value_line};
use super::styles::{ACTIVE_PART, FOCUSED_FIELD, MUTED_TEXT, POPUP_BORDER, SECTION_HEADER, SELECTED};
use crate::model::calendar::{exercises_on, has_workouts_on};
use crate::model::{DaySummary, ExerciseLog, LibraryFilter, WeightUnit};
use crate::state::{ExerciseField, ExerciseForm, HistoryView, LibraryPicker, SetField, SetForm};
use chrono::{DateTime, Datelike, TimeZone};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const FORM_HINT: &str = "Tab: next field · ←/→: change · Enter: save · Esc: cancel";

fn popup(frame: &mut Frame, title: String, lines: Vec<Line<'static>>) {
    let area = centered_rect(FORM_POPUP_WIDTH_PERCENT, FORM_POPUP_HEIGHT_PERCENT, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(POPUP_BORDER)
                .title(title),
        ),
        area,
    );
}

/// `label: value` with a `>` marker and highlight when focused.
fn field_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let style = if focused { FOCUSED_FIELD } else { Style::default() };
    Line::from(vec![
        Span::styled(format!("{marker}{label:<10}"), style),
        Span::styled(value, style),
    ])
}

/// Add-exercise form, with the current time in the title.
pub fn render_exercise_form<Tz: TimeZone>(
    frame: &mut Frame,
    form: &ExerciseForm,
    units: WeightUnit,
    now: &DateTime<Tz>,
) where
    Tz::Offset: std::fmt::Display,
{
    let focus = form.focus;
    let exercise = form.exercise_name().unwrap_or("-").to_string();
    let lines = vec![
        Line::from(""),
        field_line(
            "Body part",
            format!("‹ {} ›", form.body_part),
            focus == ExerciseField::BodyPart,
        ),
        field_line(
            "Exercise",
            format!("‹ {exercise} ›"),
            focus == ExerciseField::Exercise,
        ),
        field_line("Sets", form.sets.clone(), focus == ExerciseField::Sets),
        field_line("Reps", form.reps.clone(), focus == ExerciseField::Reps),
        field_line(
            "Weight",
            format!("{} {}", form.weight, units.suffix()),
            focus == ExerciseField::Weight,
        ),
        Line::from(""),
        Line::styled(FORM_HINT, MUTED_TEXT),
    ];
    popup(
        frame,
        format!(" Add exercise · {} ", now.format("%H:%M:%S")),
        lines,
    );
}

/// Add-set form for one exercise.
pub fn render_set_form(frame: &mut Frame, form: &SetForm, units: WeightUnit) {
    let lines = vec![
        Line::from(""),
        field_line("Reps", form.reps.clone(), form.focus == SetField::Reps),
        field_line(
            "Weight",
            format!("{} {}", form.weight, units.suffix()),
            form.focus == SetField::Weight,
        ),
        Line::from(""),
        Line::styled("Tab: switch field · Enter: save · Esc: cancel", MUTED_TEXT),
    ];
    popup(frame, format!(" Add set · {} ", form.exercise_name), lines);
}

/// Library browser: filter chips then the filtered entries.
pub fn render_library(frame: &mut Frame, picker: &LibraryPicker) {
    let mut chips = Vec::new();
    let filters = std::iter::once(LibraryFilter::All)
        .chain(crate::model::BodyPart::ALL.into_iter().map(LibraryFilter::Part));
    for filter in filters {
        let style = if filter == picker.filter {
            SELECTED
        } else {
            MUTED_TEXT
        };
        chips.push(Span::styled(format!(" {} ", filter.label()), style));
        chips.push(Span::raw(" "));
    }

    let mut lines = vec![Line::from(chips), Line::from("")];
    let entries = picker.entries();
    let area = centered_rect(FORM_POPUP_WIDTH_PERCENT, FORM_POPUP_HEIGHT_PERCENT, frame.area());
    let visible = area.height.saturating_sub(5) as usize;
    let skip = picker.cursor.saturating_sub(visible.saturating_sub(1));

    for (index, entry) in entries.iter().enumerate().skip(skip).take(visible) {
        let text = format!(" {:<28} {}", entry.name, entry.body_part);
        if index == picker.cursor {
            lines.push(Line::styled(format!("›{text}"), SELECTED));
        } else {
            lines.push(Line::from(format!(" {text}")));
        }
    }
    lines.push(Line::styled(
        "h/l: filter · j/k: move · Enter: log it · Esc: close",
        MUTED_TEXT,
    ));

    popup(
        frame,
        format!(" Exercise library ({}) ", entries.len()),
        lines,
    );
}

/// Month grid with workout days marked, then the selected day's summary.
pub fn render_history<Tz: TimeZone>(
    frame: &mut Frame,
    view: &HistoryView,
    log: &ExerciseLog,
    units: WeightUnit,
    tz: &Tz,
) {
    let mut lines = vec![Line::styled(" Su  Mo  Tu  We  Th  Fr  Sa", SECTION_HEADER)];

    for week in view.month.grid().chunks(7) {
        let mut spans = Vec::new();
        for cell in week {
            match cell {
                None => spans.push(Span::raw("    ")),
                Some(date) => {
                    let marker = if has_workouts_on(log, tz, *date) { "•" } else { " " };
                    let text = format!("{:>3}{}", date.day(), marker);
                    let style = if *date == view.selected {
                        SELECTED
                    } else if marker == "•" {
                        ACTIVE_PART
                    } else {
                        Style::default()
                    };
                    spans.push(Span::styled(text, style));
                }
            }
        }
        lines.push(Line::from(spans));
    }

    let summary = DaySummary::compute(log, tz, view.selected);
    lines.push(Line::from(""));
    lines.push(Line::styled(
        view.selected.format("%A %-d %B %Y").to_string(),
        SECTION_HEADER,
    ));
    if summary.exercises == 0 {
        lines.push(Line::styled("No workout logged.", MUTED_TEXT));
    } else {
        lines.push(key_value_line(
            "Workout",
            format!(
                "{} exercises · {} sets · {} · ~{} min",
                summary.exercises,
                summary.sets,
                format_mass(summary.volume, units),
                summary.minutes
            ),
            SECTION_HEADER,
        ));
        for exercise in exercises_on(log, tz, view.selected) {
            lines.push(Line::from(format!(
                "  {} [{}] {} sets",
                exercise.name(),
                exercise.body_part(),
                exercise.sets().len()
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "arrows: day · h/l: month · Esc: close",
        MUTED_TEXT,
    ));

    popup(frame, format!(" History · {} ", view.month.title()), lines);
}
