//! Progress tab: week-over-week, muscle balance, and the weekly volume chart.

use super::constants::{
    BALANCE_BAR_WIDTH, BALANCE_HEIGHT, BAR_WIDTH, CHART_RESOLUTION, SCALE_LABEL_LIMIT,
};
use super::helpers::{format_mass, key_value_line};
use super::styles::{trend_style, BAR, MUTED_TEXT, SECTION_HEADER};
use crate::model::{MuscleBreakdown, Trend, WeekOverWeek, WeeklyVolume, WeightUnit};
use crate::state::forms::format_weight;
use crate::state::AppState;
use chrono::{DateTime, TimeZone};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Render the Progress tab for the week containing `now`.
pub fn render_progress<Tz: TimeZone>(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    now: &DateTime<Tz>,
) {
    let week = WeeklyVolume::compute(state.log(), now);
    let muscles = MuscleBreakdown::compute(state.log(), &week);
    let wow = WeekOverWeek::compute(state.log(), &week);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(BALANCE_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(overview_lines(&wow, &muscles, state.units))
            .block(Block::default().borders(Borders::ALL).title(" This week ")),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(balance_lines(&muscles))
            .block(Block::default().borders(Borders::ALL).title(" Muscle balance ")),
        chunks[1],
    );
    render_volume_chart(frame, chunks[2], &week, state.units);
}

fn trend_marker(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
        Trend::Flat => "=",
    }
}

fn overview_lines(
    wow: &WeekOverWeek,
    muscles: &MuscleBreakdown,
    units: WeightUnit,
) -> Vec<Line<'static>> {
    let style = trend_style(wow.trend);
    vec![
        Line::from(vec![
            Span::styled("Week over week: ", SECTION_HEADER),
            Span::styled(
                format!("{} {} ", trend_marker(wow.trend), wow.formatted()),
                style,
            ),
            Span::raw(format!(
                "({} vs {}) {}",
                format_mass(wow.current, units),
                format_mass(wow.previous, units),
                wow.note
            )),
        ]),
        key_value_line("Muscles", muscles.summary.clone(), SECTION_HEADER),
    ]
}

/// One row per balance axis, bar length proportional to the normalised count.
fn balance_lines(muscles: &MuscleBreakdown) -> Vec<Line<'static>> {
    muscles
        .balance
        .iter()
        .map(|axis| {
            let filled = (axis.value * BALANCE_BAR_WIDTH as f64).round() as usize;
            let bar = "█".repeat(filled);
            let rest = "·".repeat(BALANCE_BAR_WIDTH.saturating_sub(filled));
            Line::from(vec![
                Span::raw(format!("{:<10}", axis.label)),
                Span::styled(bar, BAR),
                Span::styled(rest, MUTED_TEXT),
                Span::raw(format!(" {}", axis.count)),
            ])
        })
        .collect()
}

/// Tick labels under the chart; long scales keep only both ends.
fn scale_line(week: &WeeklyVolume) -> String {
    if week.tick_count() <= SCALE_LABEL_LIMIT {
        week.ticks().map(format_weight).collect::<Vec<_>>().join(" · ")
    } else {
        format!(
            "0 · {} · … · {}",
            format_weight(week.step),
            format_weight(week.max)
        )
    }
}

/// Height of a day's bar on a `0..=CHART_RESOLUTION` scale. Any volume
/// above zero gets at least one unit so its label is drawn.
fn bar_height(volume: f64, max: f64) -> u64 {
    if volume <= 0.0 || max <= 0.0 {
        0
    } else if volume >= max {
        CHART_RESOLUTION
    } else {
        ((volume / max * CHART_RESOLUTION as f64).round() as u64).max(1)
    }
}

fn render_volume_chart(frame: &mut Frame, area: Rect, week: &WeeklyVolume, units: WeightUnit) {
    let ticks = scale_line(week);
    let title = format!(" Daily volume ({}) ", units.suffix());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let bars: Vec<Bar> = week
        .days
        .iter()
        .map(|day| {
            Bar::default()
                .label(Line::from(day.label))
                .value(bar_height(day.volume, week.max))
                .text_value(format_weight(day.volume.round()))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(1)
        .bar_style(BAR)
        .max(CHART_RESOLUTION);

    frame.render_widget(chart, chunks[0]);
    frame.render_widget(
        Paragraph::new(Line::styled(format!(" Scale: {ticks}"), MUTED_TEXT)),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BodyPart, ExerciseLog, NewExercise};
    use crate::view::buffer_to_string;
    use chrono::{Duration, FixedOffset, Utc};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 14, 20, 0, 0)
            .unwrap()
    }

    fn render(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| render_progress(frame, frame.area(), state, &now()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn empty_week_is_flat_with_default_scale() {
        let state = AppState::new(ExerciseLog::new());
        let text = render(&state);
        assert!(text.contains("= +0%"));
        assert!(text.contains("stable week"));
        assert!(text.contains("No sets this week"));
        assert!(text.contains("Scale: 0 · 500 · 1000 · 1500 · 2000 · 2500 · 3000"));
        for label in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
            assert!(text.contains(label), "missing {label}");
        }
    }

    fn state_with(weight: f64) -> AppState {
        let mut state = AppState::new(ExerciseLog::new());
        let at = now().with_timezone(&Utc) - Duration::hours(1);
        state
            .add_exercise(
                NewExercise {
                    name: "Sled Push".into(),
                    body_part: BodyPart::Legs,
                    sets: 2,
                    reps: 10,
                    weight,
                },
                at,
            )
            .unwrap();
        state
    }

    #[test]
    fn huge_volume_shortens_the_scale() {
        let text = render(&state_with(1e20));
        assert!(text.contains("Scale: 0 · 500 · … · 2000000000000000000000"));
        assert!(text.contains("Legs 100%"));
    }

    #[test]
    fn infinite_volume_still_renders() {
        let text = render(&state_with(f64::MAX));
        assert!(text.contains("Scale: 0 · 500 · … · inf"));
        assert!(text.contains("▲ +100%"));
    }

    #[test]
    fn bar_heights_are_scaled_to_the_axis() {
        assert_eq!(bar_height(0.0, 3000.0), 0);
        assert_eq!(bar_height(1500.0, 3000.0), CHART_RESOLUTION / 2);
        assert_eq!(bar_height(1.0, 3000.0), 1);
        assert_eq!(bar_height(f64::INFINITY, f64::INFINITY), CHART_RESOLUTION);
        assert_eq!(bar_height(1e21, 1e21), CHART_RESOLUTION);
    }

    #[test]
    fn first_week_of_training_is_up_one_hundred_percent() {
        let mut state = AppState::new(ExerciseLog::new());
        let at = now().with_timezone(&Utc) - Duration::hours(1);
        state
            .add_exercise(
                NewExercise {
                    name: "Deadlift".into(),
                    body_part: BodyPart::Back,
                    sets: 2,
                    reps: 5,
                    weight: 100.0,
                },
                at,
            )
            .unwrap();

        let text = render(&state);
        assert!(text.contains("▲ +100%"));
        assert!(text.contains("good progressive overload!"));
        assert!(text.contains("Back 100%"));
        assert!(text.contains("(1000 kg vs 0 kg)"));
    }
}
