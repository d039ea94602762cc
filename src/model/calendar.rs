//! Month calendar for the workout history view.

use crate::model::stats::{exercises_in, DayWindow};
use crate::model::{ExerciseEntry, ExerciseLog};
use chrono::{Datelike, Months, NaiveDate, TimeZone};

/// Estimated minutes spent per set when summarising a day.
pub const MINUTES_PER_SET: u32 = 2;

/// A calendar month, always anchored on its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCalendar {
    first: NaiveDate,
}

impl MonthCalendar {
    /// Month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Month for `year`/`month`, or `None` if out of range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Calendar month, 1-based.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// "October 2026".
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// Number of days in the month.
    pub fn days_in_month(&self) -> u32 {
        match self.first.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.first).num_days() as u32,
            None => 31,
        }
    }

    /// Weekday of the 1st, Sunday = 0.
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// Sunday-first grid: leading `None` cells followed by every day.
    ///
    /// The grid is not padded at the end; rows are formed by chunking in 7s.
    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        let leading = self.first_weekday() as usize;
        let days = self.days_in_month();
        let mut cells = Vec::with_capacity(leading + days as usize);
        cells.extend(std::iter::repeat(None).take(leading));
        cells.extend((1..=days).filter_map(|d| self.first.with_day(d)).map(Some));
        cells
    }

    /// Following month.
    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// Preceding month.
    pub fn prev(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// Whether `date` is in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

/// Exercises logged on the local `date`, newest first.
pub fn exercises_on<'a, Tz: TimeZone>(
    log: &'a ExerciseLog,
    tz: &Tz,
    date: NaiveDate,
) -> Vec<&'a ExerciseEntry> {
    exercises_in(log, &DayWindow::for_date(tz, date))
}

/// Whether anything was logged on the local `date`.
pub fn has_workouts_on<Tz: TimeZone>(log: &ExerciseLog, tz: &Tz, date: NaiveDate) -> bool {
    let window = DayWindow::for_date(tz, date);
    log.exercises()
        .iter()
        .any(|e| window.contains(e.logged_at()))
}

/// Overview of one day in the history view.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    /// The day.
    pub date: NaiveDate,
    /// Exercises logged that day.
    pub exercises: usize,
    /// Sets across those exercises.
    pub sets: usize,
    /// Volume across those sets.
    pub volume: f64,
    /// Estimated duration in minutes.
    pub minutes: u32,
}

impl DaySummary {
    /// Summarise the local `date`.
    pub fn compute<Tz: TimeZone>(log: &ExerciseLog, tz: &Tz, date: NaiveDate) -> Self {
        let exercises = exercises_on(log, tz, date);
        let sets: usize = exercises.iter().map(|e| e.sets().len()).sum();
        Self {
            date,
            exercises: exercises.len(),
            sets,
            volume: exercises.iter().map(|e| e.volume()).sum(),
            minutes: sets as u32 * MINUTES_PER_SET,
        }
    }
}
