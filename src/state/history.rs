//! Workout history calendar overlay.

use crate::model::MonthCalendar;
use chrono::{Datelike, Duration, NaiveDate};

/// Visible month plus the selected day. The month always contains the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryView {
    /// Month on screen.
    pub month: MonthCalendar,
    /// Selected day.
    pub selected: NaiveDate,
}

impl HistoryView {
    /// Open on `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            month: MonthCalendar::containing(today),
            selected: today,
        }
    }

    /// Move the selection by `days`; the month follows.
    pub fn move_days(&mut self, days: i64) {
        if let Some(date) = self.selected.checked_add_signed(Duration::days(days)) {
            self.selected = date;
            self.month = MonthCalendar::containing(date);
        }
    }

    /// Show the next month, keeping the day of month where possible.
    pub fn next_month(&mut self) {
        self.jump_to(self.month.next());
    }

    /// Show the previous month, keeping the day of month where possible.
    pub fn prev_month(&mut self) {
        self.jump_to(self.month.prev());
    }

    fn jump_to(&mut self, month: MonthCalendar) {
        let day = self.selected.day().min(month.days_in_month());
        self.month = month;
        self.selected = month.first_day().with_day(day).unwrap_or(month.first_day());
    }
}
