//! Workout statistics.
//!
//! Pure aggregation over an [`ExerciseLog`] and a point in time. Every
//! function is generic over the time zone of `now`: the TUI passes
//! `chrono::Local`, tests pass fixed offsets. Calendar boundaries (days and
//! the Sunday-to-Saturday week) are taken in that zone.
//!
//! # Invariants
//!
//! - The seven day windows of [`WeeklyVolume`] partition
//!   `[range_start, range_end]`, so the histogram sums to the week total
//! - Sets without a known timestamp contribute to no time-windowed figure
//! - Percentages use half-up rounding

use crate::model::{BodyPart, ExerciseEntry, ExerciseLog};
use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc, Weekday,
};
use serde::Serialize;

/// Spacing between weekly chart ticks.
pub const VOLUME_STEP: f64 = 500.0;

/// The weekly chart always shows at least 0..=3000.
pub const MIN_AXIS_MAX: f64 = VOLUME_STEP * 6.0;

/// Week-over-week change (in whole percent) that counts as a trend.
pub const TREND_THRESHOLD: i64 = 10;

/// Summary shown when no sets fall in the current week.
pub const NO_SETS_THIS_WEEK: &str = "No sets this week";

/// Round half up, matching how the percentages are displayed.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn one_ms() -> Duration {
    Duration::milliseconds(1)
}

fn one_week() -> Duration {
    Duration::days(7)
}

/// First instant of `date` in `tz`.
///
/// When local midnight does not exist (DST gap) the first valid hour is
/// used; when it is ambiguous the earlier instant wins.
pub fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    for hour in 0..4 {
        let Some(naive) = date.and_hms_opt(hour, 0, 0) else {
            continue;
        };
        match tz.from_local_datetime(&naive) {
            LocalResult::Single(t) => return t.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => return earliest.with_timezone(&Utc),
            LocalResult::None => continue,
        }
    }
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Inclusive window covering one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayWindow {
    /// Local calendar date.
    pub date: NaiveDate,
    /// First millisecond of the day.
    pub start: DateTime<Utc>,
    /// Last millisecond of the day (next local midnight minus 1 ms).
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// Window for `date` in `tz`.
    pub fn for_date<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Self {
        let start = start_of_day(tz, date);
        let end = match date.succ_opt() {
            Some(next) => start_of_day(tz, next) - one_ms(),
            None => start + Duration::days(1) - one_ms(),
        };
        Self { date, start, end }
    }

    /// Window for the local day containing `now`.
    pub fn today<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self::for_date(&now.timezone(), now.date_naive())
    }

    /// Whether `t` falls inside the window (both ends inclusive).
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        t >= self.start && t <= self.end
    }
}

/// Three-letter weekday label.
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}

// ===== LogTotals =====

/// Totals across the whole log, regardless of time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LogTotals {
    /// Sum of reps x weight.
    pub volume: f64,
    /// Number of sets.
    pub sets: usize,
    /// Sum of reps.
    pub reps: u64,
}

impl LogTotals {
    /// Sum every set in the log.
    pub fn from_log(log: &ExerciseLog) -> Self {
        log.sets().fold(Self::default(), |acc, (_, set)| Self {
            volume: acc.volume + set.volume(),
            sets: acc.sets + 1,
            reps: acc.reps + u64::from(set.reps()),
        })
    }
}

// ===== TodaySummary =====

/// What was logged today, judged by each exercise's own timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodaySummary {
    /// The local day being summarised.
    pub window: DayWindow,
    /// Exercises logged today.
    pub exercises: usize,
    /// Sets belonging to those exercises.
    pub sets: usize,
    /// Volume of those sets.
    pub volume: f64,
    /// Distinct body parts trained today, in first-seen (newest-first) order.
    pub active_parts: Vec<BodyPart>,
}

impl TodaySummary {
    /// Summarise the local day containing `now`.
    pub fn compute<Tz: TimeZone>(log: &ExerciseLog, now: &DateTime<Tz>) -> Self {
        let window = DayWindow::today(now);
        let mut summary = Self {
            window,
            exercises: 0,
            sets: 0,
            volume: 0.0,
            active_parts: Vec::new(),
        };
        for exercise in exercises_in(log, &window) {
            summary.exercises += 1;
            summary.sets += exercise.sets().len();
            summary.volume += exercise.volume();
            if !summary.active_parts.contains(&exercise.body_part()) {
                summary.active_parts.push(exercise.body_part());
            }
        }
        summary
    }

    /// Whether `part` should be highlighted. Full Body lights up everything.
    pub fn is_active(&self, part: BodyPart) -> bool {
        self.active_parts.contains(&part) || self.active_parts.contains(&BodyPart::FullBody)
    }
}

/// Exercises whose own timestamp lies in `window`, newest first.
pub fn exercises_in<'a>(log: &'a ExerciseLog, window: &DayWindow) -> Vec<&'a ExerciseEntry> {
    log.exercises()
        .iter()
        .filter(|e| window.contains(e.logged_at()))
        .collect()
}

// ===== WeeklyVolume =====

/// Volume lifted on one day of the current week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayVolume {
    /// Weekday label, e.g. "Sun".
    pub label: &'static str,
    /// The day's window.
    pub window: DayWindow,
    /// Sum of reps x weight for sets logged that day.
    pub volume: f64,
}

/// Sunday-to-Saturday volume histogram for the week containing `now`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyVolume {
    /// Seven days, Sunday first.
    pub days: Vec<DayVolume>,
    /// Top of the chart axis.
    pub max: f64,
    /// Axis step.
    pub step: f64,
    /// First millisecond of Sunday.
    pub range_start: DateTime<Utc>,
    /// Last millisecond of Saturday.
    pub range_end: DateTime<Utc>,
}

impl WeeklyVolume {
    /// Bucket every timestamped set into the current week's days.
    pub fn compute<Tz: TimeZone>(log: &ExerciseLog, now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let today = now.date_naive();
        let sunday = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));

        let mut days: Vec<DayVolume> = (0..7)
            .map(|offset| {
                let date = sunday + Duration::days(offset);
                DayVolume {
                    label: weekday_label(date.weekday()),
                    window: DayWindow::for_date(&tz, date),
                    volume: 0.0,
                }
            })
            .collect();

        for (_, set) in log.sets() {
            let Some(ts) = set.logged_at() else {
                continue;
            };
            if let Some(day) = days.iter_mut().find(|d| d.window.contains(ts)) {
                day.volume += set.volume();
            }
        }

        let largest = days.iter().map(|d| d.volume).fold(1.0_f64, f64::max);
        let max = MIN_AXIS_MAX.max((largest / VOLUME_STEP).ceil() * VOLUME_STEP);

        let range_start = days[0].window.start;
        let range_end = days[6].window.end;

        Self {
            days,
            max,
            step: VOLUME_STEP,
            range_start,
            range_end,
        }
    }

    /// Whether `t` falls in this week.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        t >= self.range_start && t <= self.range_end
    }

    /// Number of axis ticks from 0 to `max` inclusive (saturating).
    pub fn tick_count(&self) -> u64 {
        // Float-to-int casts saturate; an infinite axis gives u64::MAX.
        ((self.max / self.step) as u64).saturating_add(1)
    }

    /// Axis ticks 0, `step`, ... `max`, produced on demand.
    pub fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.tick_count()).map(move |i| i as f64 * self.step)
    }

    /// Sum of the seven daily volumes.
    pub fn histogram_total(&self) -> f64 {
        self.days.iter().map(|d| d.volume).sum()
    }
}

// ===== MuscleBreakdown =====

/// Share of this week's sets that trained one body part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MuscleShare {
    /// Body part.
    pub part: BodyPart,
    /// Number of sets this week.
    pub count: u32,
    /// Rounded percentage of all sets this week.
    pub percent: u32,
}

/// One axis of the muscle balance chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceAxis {
    /// Body part on this axis.
    pub part: BodyPart,
    /// Axis label.
    pub label: &'static str,
    /// Sets this week.
    pub count: u32,
    /// Count divided by the largest axis count, in `0.0..=1.0`.
    pub value: f64,
}

/// Distribution of this week's sets across body parts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MuscleBreakdown {
    /// Shares ordered by descending count; ties keep first-seen order.
    pub entries: Vec<MuscleShare>,
    /// Total sets counted.
    pub total_sets: u32,
    /// "Chest 50%, Back 50%" or [`NO_SETS_THIS_WEEK`].
    pub summary: String,
    /// Normalised counts for the six balance axes.
    pub balance: Vec<BalanceAxis>,
}

impl MuscleBreakdown {
    /// Count sets per body part within the week window.
    pub fn compute(log: &ExerciseLog, week: &WeeklyVolume) -> Self {
        let mut counts: Vec<(BodyPart, u32)> = Vec::new();
        let mut total: u32 = 0;

        for (exercise, set) in log.sets() {
            let Some(ts) = set.logged_at() else {
                continue;
            };
            if !week.contains(ts) {
                continue;
            }
            let part = exercise.body_part();
            match counts.iter_mut().find(|(p, _)| *p == part) {
                Some((_, c)) => *c += 1,
                None => counts.push((part, 1)),
            }
            total += 1;
        }

        let mut entries: Vec<MuscleShare> = counts
            .iter()
            .map(|&(part, count)| MuscleShare {
                part,
                count,
                percent: if total == 0 {
                    0
                } else {
                    round_half_up(f64::from(count) / f64::from(total) * 100.0) as u32
                },
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        let summary = if entries.is_empty() {
            NO_SETS_THIS_WEEK.to_string()
        } else {
            entries
                .iter()
                .map(|e| format!("{} {}%", e.part, e.percent))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let count_for = |part: BodyPart| {
            counts
                .iter()
                .find(|(p, _)| *p == part)
                .map(|(_, c)| *c)
                .unwrap_or(0)
        };
        let largest = BodyPart::BALANCE_AXES
            .iter()
            .map(|p| count_for(*p))
            .max()
            .unwrap_or(0)
            .max(1);
        let balance = BodyPart::BALANCE_AXES
            .iter()
            .map(|&part| {
                let count = count_for(part);
                BalanceAxis {
                    part,
                    label: part.axis_label(),
                    count,
                    value: f64::from(count) / f64::from(largest),
                }
            })
            .collect();

        Self {
            entries,
            total_sets: total,
            summary,
            balance,
        }
    }

    /// Sum of the rounded percentages.
    pub fn percent_total(&self) -> u32 {
        self.entries.iter().map(|e| e.percent).sum()
    }
}

// ===== WeekOverWeek =====

/// Direction of the week-over-week change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    /// Rounded change above zero.
    Up,
    /// Rounded change below zero.
    Down,
    /// Rounded change of exactly zero.
    Flat,
}

/// Current week volume compared with the seven days before it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekOverWeek {
    /// Volume in the current week window.
    pub current: f64,
    /// Volume in the seven days immediately before it.
    pub previous: f64,
    /// Unrounded percentage change.
    pub change_pct: f64,
    /// Change rounded half up.
    pub rounded: i64,
    /// Sign of `rounded`.
    pub trend: Trend,
    /// Coaching note for the change.
    pub note: &'static str,
}

impl WeekOverWeek {
    /// Compare this week with the previous 7 days.
    ///
    /// Days before any data was logged count as zero volume.
    pub fn compute(log: &ExerciseLog, week: &WeeklyVolume) -> Self {
        let prev_start = week.range_start - one_week();
        let prev_end = week.range_start - one_ms();

        let mut current = 0.0;
        let mut previous = 0.0;
        for (_, set) in log.sets() {
            let Some(ts) = set.logged_at() else {
                continue;
            };
            if week.contains(ts) {
                current += set.volume();
            } else if ts >= prev_start && ts <= prev_end {
                previous += set.volume();
            }
        }

        let change_pct = percent_change(previous, current);
        let rounded = round_half_up(change_pct) as i64;
        let trend = match rounded {
            r if r > 0 => Trend::Up,
            r if r < 0 => Trend::Down,
            _ => Trend::Flat,
        };

        Self {
            current,
            previous,
            change_pct,
            rounded,
            trend,
            note: trend_note(rounded),
        }
    }

    /// "+12%", "-3%", "+0%".
    pub fn formatted(&self) -> String {
        let sign = if self.rounded >= 0 { "+" } else { "" };
        format!("{}{}%", sign, self.rounded)
    }
}

/// Percentage change from `previous` to `current`.
///
/// +100 when starting from zero, 0 when both are zero.
pub fn percent_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        if current > 0.0 {
            100.0
        } else {
            0.0
        }
    } else {
        (current - previous) / previous * 100.0
    }
}

fn trend_note(rounded: i64) -> &'static str {
    if rounded >= TREND_THRESHOLD {
        "good progressive overload!"
    } else if rounded <= -TREND_THRESHOLD {
        "consider deload or consistency"
    } else {
        "stable week"
    }
}

// ===== ProgressReport =====

/// Everything the Today and Progress tabs display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    /// The instant the report was computed for.
    pub generated_at: DateTime<Utc>,
    /// Whole-log totals.
    pub totals: LogTotals,
    /// Today's summary.
    pub today: TodaySummary,
    /// Weekly histogram.
    pub weekly: WeeklyVolume,
    /// Muscle distribution for the week.
    pub muscles: MuscleBreakdown,
    /// Comparison with the previous week.
    pub week_over_week: WeekOverWeek,
}

impl ProgressReport {
    /// Compute all statistics for `now`.
    pub fn compute<Tz: TimeZone>(log: &ExerciseLog, now: &DateTime<Tz>) -> Self {
        let weekly = WeeklyVolume::compute(log, now);
        let muscles = MuscleBreakdown::compute(log, &weekly);
        let week_over_week = WeekOverWeek::compute(log, &weekly);
        Self {
            generated_at: now.with_timezone(&Utc),
            totals: LogTotals::from_log(log),
            today: TodaySummary::compute(log, now),
            weekly,
            muscles,
            week_over_week,
        }
    }
}

// ===== Tests =====
