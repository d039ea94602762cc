//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! All state transitions are plain methods with no I/O; time arrives as an
//! argument.

use crate::model::{
    EntryRejected, ExerciseEntry, ExerciseId, ExerciseLog, NewExercise, SetId, WeightUnit,
};
use crate::state::{ExerciseForm, FormDefaults, HistoryView, LibraryPicker, SetForm};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

// ===== Tab =====

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Exercise list with sets.
    #[default]
    Logger,
    /// Today's stats and muscles.
    Today,
    /// Weekly progress charts.
    Progress,
}

impl Tab {
    /// Tabs in display order.
    pub const ALL: [Tab; 3] = [Tab::Logger, Tab::Today, Tab::Progress];

    /// Tab title.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Logger => "Logger",
            Tab::Today => "Today",
            Tab::Progress => "Progress",
        }
    }

    /// Position in [`Tab::ALL`].
    pub fn index(self) -> usize {
        match self {
            Tab::Logger => 0,
            Tab::Today => 1,
            Tab::Progress => 2,
        }
    }

    /// Tab for a 1-based number key.
    pub fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Next tab, wrapping.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Error returned when parsing an unknown tab name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tab '{0}' (expected logger, today or progress)")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "logger" | "log" => Ok(Tab::Logger),
            "today" => Ok(Tab::Today),
            "progress" => Ok(Tab::Progress),
            _ => Err(UnknownTab(s.to_string())),
        }
    }
}

// ===== Overlay =====

/// The single overlay drawn above the active tab, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    /// Nothing open; keys go to the main screen.
    #[default]
    None,
    /// Keyboard help.
    Help {
        /// Lines scrolled.
        scroll: u16,
    },
    /// Add-exercise form.
    AddExercise(ExerciseForm),
    /// Add-set form.
    AddSet(SetForm),
    /// Exercise library browser.
    Library(LibraryPicker),
    /// Workout history calendar.
    History(HistoryView),
}

impl Overlay {
    /// Whether an overlay is open.
    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::None)
    }
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # Invariants
///
/// - `cursor` is 0 or a valid index into the exercise list
/// - `expanded`, when set, names an exercise that exists
/// - `set_cursor` is 0 or a valid index into the expanded exercise's sets
#[derive(Debug, Clone)]
pub struct AppState {
    log: ExerciseLog,
    /// Active tab.
    pub tab: Tab,
    /// Active overlay.
    pub overlay: Overlay,
    /// Selected exercise in the logger list.
    pub cursor: usize,
    /// Exercise whose sets are shown.
    pub expanded: Option<ExerciseId>,
    /// Selected set within the expanded exercise.
    pub set_cursor: usize,
    /// Display unit.
    pub units: WeightUnit,
    /// Add-exercise form defaults.
    pub defaults: FormDefaults,
    /// Set when the user asked to quit.
    pub should_quit: bool,
}

impl AppState {
    /// Fresh state over `log`.
    pub fn new(log: ExerciseLog) -> Self {
        Self {
            log,
            tab: Tab::default(),
            overlay: Overlay::None,
            cursor: 0,
            expanded: None,
            set_cursor: 0,
            units: WeightUnit::default(),
            defaults: FormDefaults::default(),
            should_quit: false,
        }
    }

    /// Builder: start tab.
    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.tab = tab;
        self
    }

    /// Builder: weight unit.
    pub fn with_units(mut self, units: WeightUnit) -> Self {
        self.units = units;
        self
    }

    /// Builder: form defaults.
    pub fn with_defaults(mut self, defaults: FormDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// The exercise log.
    pub fn log(&self) -> &ExerciseLog {
        &self.log
    }

    /// Exercise under the cursor.
    pub fn selected_exercise(&self) -> Option<&ExerciseEntry> {
        self.log.exercises().get(self.cursor)
    }

    /// The expanded exercise, if it is the one under the cursor.
    fn expanded_selected(&self) -> Option<&ExerciseEntry> {
        let selected = self.selected_exercise()?;
        (self.expanded.as_ref() == Some(selected.id())).then_some(selected)
    }

    /// Whether `id` is expanded.
    pub fn is_expanded(&self, id: &ExerciseId) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    // ----- navigation -----

    /// Move the exercise cursor down.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.log.len() {
            self.cursor += 1;
            self.set_cursor = 0;
        }
    }

    /// Move the exercise cursor up.
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.set_cursor = 0;
        }
    }

    /// Expand the exercise under the cursor, or collapse it if expanded.
    pub fn toggle_expand(&mut self) {
        let Some(id) = self.selected_exercise().map(|e| e.id().clone()) else {
            return;
        };
        if self.expanded.as_ref() == Some(&id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id);
        }
        self.set_cursor = 0;
    }

    /// Move the set cursor down within the expanded exercise.
    pub fn next_set(&mut self) {
        let Some(len) = self.expanded_selected().map(|e| e.sets().len()) else {
            return;
        };
        if self.set_cursor + 1 < len {
            self.set_cursor += 1;
        }
    }

    /// Move the set cursor up within the expanded exercise.
    pub fn prev_set(&mut self) {
        self.set_cursor = self.set_cursor.saturating_sub(1);
    }

    /// Set under the set cursor of the expanded exercise.
    pub fn selected_set(&self) -> Option<(ExerciseId, SetId)> {
        let exercise = self.expanded_selected()?;
        let set = exercise.sets().get(self.set_cursor)?;
        Some((exercise.id().clone(), set.id().clone()))
    }

    // ----- overlays -----

    /// Open the add-exercise form.
    pub fn open_add_exercise(&mut self) {
        self.overlay = Overlay::AddExercise(ExerciseForm::new(self.defaults));
    }

    /// Open the add-set form for the selected exercise.
    pub fn open_add_set(&mut self) {
        if let Some(form) = self.selected_exercise().map(SetForm::for_exercise) {
            self.overlay = Overlay::AddSet(form);
        }
    }

    /// Open the library browser.
    pub fn open_library(&mut self) {
        self.overlay = Overlay::Library(LibraryPicker::default());
    }

    /// Open the history calendar on `today`.
    pub fn open_history(&mut self, today: NaiveDate) {
        self.overlay = Overlay::History(HistoryView::new(today));
    }

    /// Open keyboard help.
    pub fn open_help(&mut self) {
        self.overlay = Overlay::Help { scroll: 0 };
    }

    /// Close whatever overlay is open.
    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    /// Toggle the display unit.
    pub fn toggle_units(&mut self) {
        self.units = self.units.toggled();
        debug!(units = %self.units, "Units toggled");
    }

    // ----- mutations -----

    /// Log an exercise and select it.
    pub fn add_exercise(
        &mut self,
        request: NewExercise,
        now: DateTime<Utc>,
    ) -> Result<ExerciseId, EntryRejected> {
        let id = self.log.add_exercise(request, now)?;
        self.cursor = 0;
        self.set_cursor = 0;
        Ok(id)
    }

    /// Add a set to an exercise.
    pub fn add_set(
        &mut self,
        exercise_id: &ExerciseId,
        reps: u32,
        weight: f64,
        now: DateTime<Utc>,
    ) -> Result<SetId, EntryRejected> {
        let id = self.log.add_set(exercise_id, reps, weight, now)?;
        if self.is_expanded(exercise_id) {
            self.set_cursor = 0;
        }
        Ok(id)
    }

    /// Delete the exercise under the cursor.
    pub fn delete_selected_exercise(&mut self) -> bool {
        let Some(id) = self.selected_exercise().map(|e| e.id().clone()) else {
            return false;
        };
        let removed = self.log.remove_exercise(&id);
        if self.expanded.as_ref() == Some(&id) {
            self.expanded = None;
        }
        self.clamp_cursors();
        removed
    }

    /// Delete the set under the set cursor.
    pub fn delete_selected_set(&mut self) -> bool {
        let Some((exercise_id, set_id)) = self.selected_set() else {
            return false;
        };
        let removed = self.log.remove_set(&exercise_id, &set_id);
        self.clamp_cursors();
        removed
    }

    fn clamp_cursors(&mut self) {
        self.cursor = self.cursor.min(self.log.len().saturating_sub(1));
        let sets = self.expanded_selected().map_or(0, |e| e.sets().len());
        self.set_cursor = self.set_cursor.min(sets.saturating_sub(1));
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
