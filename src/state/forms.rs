//! Add-exercise and add-set forms.
//!
//! Forms hold raw text; nothing is parsed until submit. A field that does
//! not parse makes submit return `None` and the form stays open.

use crate::model::library::{self, LibraryEntry};
use crate::model::{BodyPart, ExerciseEntry, ExerciseId, NewExercise};

/// Whether `c` may be typed into a numeric field.
pub fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Push `c` onto `field` when it is a numeric character.
fn push_numeric(field: &mut String, c: char) {
    if is_numeric_char(c) {
        field.push(c);
    }
}

/// Format a weight without a trailing `.0`. The text parses back to the
/// same value at any magnitude.
pub fn format_weight(weight: f64) -> String {
    if weight == 0.0 {
        // Covers -0.0, which Display renders as "-0".
        "0".to_string()
    } else {
        weight.to_string()
    }
}

/// Pre-fill values for a new exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormDefaults {
    /// Number of sets.
    pub sets: u32,
    /// Reps per set.
    pub reps: u32,
    /// Weight per set.
    pub weight: f64,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            sets: 3,
            reps: 10,
            weight: 0.0,
        }
    }
}

// ===== ExerciseForm =====

/// Focusable fields of the add-exercise form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseField {
    /// Body part selector.
    BodyPart,
    /// Exercise selector.
    Exercise,
    /// Sets text field.
    Sets,
    /// Reps text field.
    Reps,
    /// Weight text field.
    Weight,
}

impl ExerciseField {
    const ORDER: [ExerciseField; 5] = [
        ExerciseField::BodyPart,
        ExerciseField::Exercise,
        ExerciseField::Sets,
        ExerciseField::Reps,
        ExerciseField::Weight,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field, wrapping.
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Previous field, wrapping.
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// State of the add-exercise overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseForm {
    /// Selected body part.
    pub body_part: BodyPart,
    /// Index into the library entries for `body_part`.
    pub exercise_index: usize,
    /// Raw sets text.
    pub sets: String,
    /// Raw reps text.
    pub reps: String,
    /// Raw weight text.
    pub weight: String,
    /// Focused field.
    pub focus: ExerciseField,
}

impl ExerciseForm {
    /// Blank form: first body part, its first exercise, default numbers.
    pub fn new(defaults: FormDefaults) -> Self {
        Self {
            body_part: BodyPart::Chest,
            exercise_index: 0,
            sets: defaults.sets.to_string(),
            reps: defaults.reps.to_string(),
            weight: format_weight(defaults.weight),
            focus: ExerciseField::BodyPart,
        }
    }

    /// Form pre-filled with a library entry, focused on the numbers.
    pub fn from_entry(entry: LibraryEntry, defaults: FormDefaults) -> Self {
        let exercise_index = library::for_body_part(entry.body_part)
            .iter()
            .position(|e| e.name == entry.name)
            .unwrap_or(0);
        Self {
            body_part: entry.body_part,
            exercise_index,
            focus: ExerciseField::Sets,
            ..Self::new(defaults)
        }
    }

    /// Library entries offered for the selected body part.
    pub fn choices(&self) -> Vec<LibraryEntry> {
        library::for_body_part(self.body_part)
    }

    /// Name of the selected exercise.
    pub fn exercise_name(&self) -> Option<&'static str> {
        self.choices().get(self.exercise_index).map(|e| e.name)
    }

    /// Choose a body part; the exercise resets to its first entry.
    pub fn set_body_part(&mut self, part: BodyPart) {
        self.body_part = part;
        self.exercise_index = 0;
    }

    /// Cycle the focused selector forward (`true`) or backward.
    pub fn cycle(&mut self, forward: bool) {
        match self.focus {
            ExerciseField::BodyPart => {
                let part = if forward {
                    self.body_part.next()
                } else {
                    self.body_part.prev()
                };
                self.set_body_part(part);
            }
            ExerciseField::Exercise => {
                let len = self.choices().len();
                if len == 0 {
                    return;
                }
                self.exercise_index = if forward {
                    (self.exercise_index + 1) % len
                } else {
                    (self.exercise_index + len - 1) % len
                };
            }
            _ => {}
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            ExerciseField::Sets => Some(&mut self.sets),
            ExerciseField::Reps => Some(&mut self.reps),
            ExerciseField::Weight => Some(&mut self.weight),
            ExerciseField::BodyPart | ExerciseField::Exercise => None,
        }
    }

    /// Type a character into the focused numeric field.
    pub fn input(&mut self, c: char) {
        if let Some(field) = self.focused_text() {
            push_numeric(field, c);
        }
    }

    /// Delete the last character of the focused numeric field.
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_text() {
            field.pop();
        }
    }

    /// Parse the form into a request, or `None` if any field fails to parse.
    pub fn to_request(&self) -> Option<NewExercise> {
        let name = self.exercise_name()?;
        let sets = self.sets.trim().parse::<u32>().ok()?;
        let reps = self.reps.trim().parse::<u32>().ok()?;
        let weight = self.weight.trim().parse::<f64>().ok()?;
        Some(NewExercise {
            name: name.to_string(),
            body_part: self.body_part,
            sets,
            reps,
            weight,
        })
    }
}

// ===== SetForm =====

/// Focusable fields of the add-set form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetField {
    /// Reps text field.
    Reps,
    /// Weight text field.
    Weight,
}

/// State of the add-set overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct SetForm {
    /// Exercise receiving the set.
    pub exercise_id: ExerciseId,
    /// Exercise name, for the title.
    pub exercise_name: String,
    /// Raw reps text.
    pub reps: String,
    /// Raw weight text.
    pub weight: String,
    /// Focused field.
    pub focus: SetField,
}

impl SetForm {
    /// Form for `exercise`, pre-filled from its newest set when it has one.
    pub fn for_exercise(exercise: &ExerciseEntry) -> Self {
        let (reps, weight) = exercise
            .sets()
            .first()
            .map(|s| (s.reps().to_string(), format_weight(s.weight())))
            .unwrap_or_default();
        Self {
            exercise_id: exercise.id().clone(),
            exercise_name: exercise.name().to_string(),
            reps,
            weight,
            focus: SetField::Reps,
        }
    }

    /// Switch between reps and weight.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SetField::Reps => SetField::Weight,
            SetField::Weight => SetField::Reps,
        };
    }

    fn focused_text(&mut self) -> &mut String {
        match self.focus {
            SetField::Reps => &mut self.reps,
            SetField::Weight => &mut self.weight,
        }
    }

    /// Type a character into the focused field.
    pub fn input(&mut self, c: char) {
        push_numeric(self.focused_text(), c);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_text().pop();
    }

    /// Parse reps and weight, or `None` if either fails to parse.
    pub fn parse(&self) -> Option<(u32, f64)> {
        let reps = self.reps.trim().parse::<u32>().ok()?;
        let weight = self.weight.trim().parse::<f64>().ok()?;
        Some((reps, weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExerciseLog;
    use chrono::{TimeZone, Utc};

    #[test]
    fn new_form_uses_defaults() {
        let form = ExerciseForm::new(FormDefaults::default());
        assert_eq!(form.sets, "3");
        assert_eq!(form.reps, "10");
        assert_eq!(form.weight, "0");
        assert_eq!(form.exercise_name(), Some("Barbell Bench Press"));
    }

    #[test]
    fn changing_body_part_resets_exercise() {
        let mut form = ExerciseForm::new(FormDefaults::default());
        form.focus = ExerciseField::Exercise;
        form.cycle(true);
        assert_eq!(form.exercise_index, 1);

        form.focus = ExerciseField::BodyPart;
        form.cycle(true);
        assert_eq!(form.body_part, BodyPart::Back);
        assert_eq!(form.exercise_index, 0);
    }

    #[test]
    fn exercise_cycle_wraps_backwards() {
        let mut form = ExerciseForm::new(FormDefaults::default());
        form.focus = ExerciseField::Exercise;
        form.cycle(false);
        assert_eq!(form.exercise_index, form.choices().len() - 1);
    }

    #[test]
    fn numeric_fields_filter_input() {
        let mut form = ExerciseForm::new(FormDefaults::default());
        form.focus = ExerciseField::Weight;
        form.backspace();
        for c in "4a2.-5".chars() {
            form.input(c);
        }
        assert_eq!(form.weight, "42.5");
    }

    #[test]
    fn selectors_ignore_typing() {
        let mut form = ExerciseForm::new(FormDefaults::default());
        form.input('7');
        assert_eq!(form, ExerciseForm::new(FormDefaults::default()));
    }

    #[test]
    fn unparseable_field_yields_no_request() {
        let mut form = ExerciseForm::new(FormDefaults::default());
        form.reps = "1.2.3".into();
        assert_eq!(form.to_request(), None);
        form.reps.clear();
        assert_eq!(form.to_request(), None);
    }

    #[test]
    fn request_carries_parsed_numbers() {
        let mut form = ExerciseForm::new(FormDefaults::default());
        form.weight = "22.5".into();
        let req = form.to_request().unwrap();
        assert_eq!(req.name, "Barbell Bench Press");
        assert_eq!((req.sets, req.reps, req.weight), (3, 10, 22.5));
    }

    #[test]
    fn from_entry_selects_that_exercise() {
        let entry = library::for_body_part(BodyPart::Legs)[2];
        let form = ExerciseForm::from_entry(entry, FormDefaults::default());
        assert_eq!(form.body_part, BodyPart::Legs);
        assert_eq!(form.exercise_name(), Some(entry.name));
        assert_eq!(form.focus, ExerciseField::Sets);
    }

    #[test]
    fn field_order_wraps() {
        assert_eq!(ExerciseField::Weight.next(), ExerciseField::BodyPart);
        assert_eq!(ExerciseField::BodyPart.prev(), ExerciseField::Weight);
    }

    #[test]
    fn set_form_prefills_from_newest_set() {
        let mut log = ExerciseLog::new();
        let at = Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap();
        let id = log
            .add_exercise(NewExercise::empty("Pull-Up", BodyPart::Back), at)
            .unwrap();
        let empty = SetForm::for_exercise(log.get(&id).unwrap());
        assert_eq!((empty.reps.as_str(), empty.weight.as_str()), ("", ""));

        log.add_set(&id, 8, 12.5, at).unwrap();
        let form = SetForm::for_exercise(log.get(&id).unwrap());
        assert_eq!(form.parse(), Some((8, 12.5)));
    }

    #[test]
    fn format_weight_drops_trailing_zero_only() {
        assert_eq!(format_weight(20.0), "20");
        assert_eq!(format_weight(42.5), "42.5");
        assert_eq!(format_weight(-0.0), "0");
        assert_eq!(format_weight(1e20), "100000000000000000000");
    }

    #[test]
    fn large_weight_survives_set_form_prefill() {
        let mut log = ExerciseLog::new();
        let at = Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap();
        let id = log
            .add_exercise(NewExercise::empty("Tire Flip", BodyPart::FullBody), at)
            .unwrap();
        for weight in [1e20, 9.5e18, 1.5e300] {
            log.add_set(&id, 3, weight, at).unwrap();
            let form = SetForm::for_exercise(log.get(&id).unwrap());
            assert_eq!(form.parse(), Some((3, weight)));
        }
    }

    #[test]
    fn set_form_rejects_fractional_reps() {
        let mut log = ExerciseLog::new();
        let at = Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap();
        let id = log
            .add_exercise(NewExercise::empty("Dip", BodyPart::Chest), at)
            .unwrap();
        let mut form = SetForm::for_exercise(log.get(&id).unwrap());
        for c in "7.5".chars() {
            form.input(c);
        }
        form.toggle_focus();
        form.input('0');
        assert_eq!(form.parse(), None);
    }
}
