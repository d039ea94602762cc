//! In-memory exercise store.
//!
//! The log is the only owner of workout data for a session. Exercises and
//! the sets inside each exercise are kept newest-first. There is no update
//! in place: editing means removing and adding again.

use crate::model::error::EntryRejected;
use crate::model::exercise::validate_set;
use crate::model::{ExerciseEntry, ExerciseId, NewExercise, SetEntry, SetId};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Ordered collection of logged exercises, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseLog {
    exercises: Vec<ExerciseEntry>,
    /// Sequence for generated id suffixes; never reused within a session.
    next_seq: u64,
}

impl ExerciseLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        seq
    }

    /// All exercises, newest first.
    pub fn exercises(&self) -> &[ExerciseEntry] {
        &self.exercises
    }

    /// Number of exercises.
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Look up an exercise by id.
    pub fn get(&self, id: &ExerciseId) -> Option<&ExerciseEntry> {
        self.exercises.iter().find(|e| e.id() == id)
    }

    /// Every set in the log, paired with its exercise.
    pub fn sets(&self) -> impl Iterator<Item = (&ExerciseEntry, &SetEntry)> {
        self.exercises
            .iter()
            .flat_map(|e| e.sets().iter().map(move |s| (e, s)))
    }

    /// Log a new exercise at the front of the list.
    ///
    /// Creates `request.sets` identical sets, all stamped `now`.
    pub fn add_exercise(
        &mut self,
        request: NewExercise,
        now: DateTime<Utc>,
    ) -> Result<ExerciseId, EntryRejected> {
        request.validate()?;

        let millis = now.timestamp_millis();
        let mut sets = Vec::with_capacity(request.sets as usize);
        for _ in 0..request.sets {
            let id = SetId::generate(millis, self.bump_seq());
            sets.push(SetEntry::new(id, request.reps, request.weight, now)?);
        }

        let id = ExerciseId::generate(millis, self.bump_seq());
        let name = request.name.trim().to_string();
        debug!(
            exercise_id = %id,
            name = %name,
            body_part = %request.body_part,
            sets = request.sets,
            "Exercise added"
        );
        self.exercises.insert(
            0,
            ExerciseEntry::new(id.clone(), name, request.body_part, sets, now),
        );
        Ok(id)
    }

    /// Append an already-built entry, keeping the caller's order.
    ///
    /// Used when loading an import file, which is already newest-first.
    pub fn insert_imported(&mut self, entry: ExerciseEntry) {
        self.exercises.push(entry);
    }

    /// Remove an exercise and all of its sets.
    ///
    /// Returns `false` (and changes nothing) when the id is unknown.
    pub fn remove_exercise(&mut self, id: &ExerciseId) -> bool {
        let before = self.exercises.len();
        self.exercises.retain(|e| e.id() != id);
        let removed = self.exercises.len() != before;
        debug!(exercise_id = %id, removed, "Remove exercise");
        removed
    }

    /// Add a set to the front of an exercise's set list.
    pub fn add_set(
        &mut self,
        exercise_id: &ExerciseId,
        reps: u32,
        weight: f64,
        now: DateTime<Utc>,
    ) -> Result<SetId, EntryRejected> {
        validate_set(reps, weight)?;
        if self.get(exercise_id).is_none() {
            return Err(EntryRejected::UnknownExercise(exercise_id.to_string()));
        }

        let set_id = SetId::generate(now.timestamp_millis(), self.bump_seq());
        let set = SetEntry::new(set_id.clone(), reps, weight, now)?;
        if let Some(exercise) = self.exercises.iter_mut().find(|e| e.id() == exercise_id) {
            exercise.push_front_set(set);
        }
        debug!(exercise_id = %exercise_id, set_id = %set_id, reps, weight, "Set added");
        Ok(set_id)
    }

    /// Remove one set. Unknown exercise or set ids are a no-op.
    pub fn remove_set(&mut self, exercise_id: &ExerciseId, set_id: &SetId) -> bool {
        let Some(exercise) = self.exercises.iter_mut().find(|e| e.id() == exercise_id) else {
            return false;
        };
        let before = exercise.sets().len();
        exercise.retain_sets(|s| s.id() != set_id);
        let removed = exercise.sets().len() != before;
        debug!(exercise_id = %exercise_id, set_id = %set_id, removed, "Remove set");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BodyPart;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, 9, 30, 0).unwrap()
    }

    fn bench(sets: u32) -> NewExercise {
        NewExercise {
            name: "Barbell Bench Press".into(),
            body_part: BodyPart::Chest,
            sets,
            reps: 10,
            weight: 20.0,
        }
    }

    #[test]
    fn add_exercise_prefills_identical_sets() {
        let mut log = ExerciseLog::new();
        let id = log.add_exercise(bench(3), t0()).unwrap();
        let exercise = log.get(&id).unwrap();
        assert_eq!(exercise.sets().len(), 3);
        assert!(exercise.sets().iter().all(|s| s.reps() == 10 && s.weight() == 20.0));
        assert_eq!(exercise.volume(), 600.0);
    }

    #[test]
    fn exercises_are_newest_first() {
        let mut log = ExerciseLog::new();
        let first = log.add_exercise(bench(0), t0()).unwrap();
        let second = log
            .add_exercise(bench(0), t0() + Duration::minutes(5))
            .unwrap();
        let ids: Vec<_> = log.exercises().iter().map(|e| e.id().clone()).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test]
    fn sets_are_newest_first() {
        let mut log = ExerciseLog::new();
        let id = log.add_exercise(bench(0), t0()).unwrap();
        let a = log.add_set(&id, 5, 50.0, t0()).unwrap();
        let b = log.add_set(&id, 6, 55.0, t0()).unwrap();
        let sets: Vec<_> = log.get(&id).unwrap().sets().iter().map(|s| s.id().clone()).collect();
        assert_eq!(sets, vec![b, a]);
    }

    #[test]
    fn generated_ids_are_unique_within_the_same_millisecond() {
        let mut log = ExerciseLog::new();
        let id = log.add_exercise(bench(4), t0()).unwrap();
        let mut set_ids: Vec<_> = log.get(&id).unwrap().sets().iter().map(|s| s.id().clone()).collect();
        set_ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        set_ids.dedup();
        assert_eq!(set_ids.len(), 4);
    }

    #[test]
    fn add_set_with_zero_reps_is_rejected() {
        let mut log = ExerciseLog::new();
        let id = log.add_exercise(bench(1), t0()).unwrap();
        let result = log.add_set(&id, 0, 20.0, t0());
        assert_eq!(result, Err(EntryRejected::NonPositiveReps));
        assert_eq!(log.get(&id).unwrap().sets().len(), 1);
    }

    #[test]
    fn add_set_with_negative_weight_is_rejected() {
        let mut log = ExerciseLog::new();
        let id = log.add_exercise(bench(0), t0()).unwrap();
        assert!(log.add_set(&id, 8, -2.5, t0()).is_err());
        assert!(log.get(&id).unwrap().sets().is_empty());
    }

    #[test]
    fn add_set_to_unknown_exercise_is_rejected() {
        let mut log = ExerciseLog::new();
        let ghost = ExerciseId::new("nope").unwrap();
        assert_eq!(
            log.add_set(&ghost, 5, 10.0, t0()),
            Err(EntryRejected::UnknownExercise("nope".into()))
        );
    }

    #[test]
    fn invalid_exercise_request_leaves_log_untouched() {
        let mut log = ExerciseLog::new();
        let mut req = bench(2);
        req.weight = f64::NAN;
        assert!(log.add_exercise(req, t0()).is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn remove_set_with_unknown_id_is_noop() {
        let mut log = ExerciseLog::new();
        let id = log.add_exercise(bench(2), t0()).unwrap();
        let before = log.get(&id).unwrap().sets().to_vec();
        let removed = log.remove_set(&id, &SetId::new("123-zzzzz").unwrap());
        assert!(!removed);
        assert_eq!(log.get(&id).unwrap().sets(), before.as_slice());
    }

    #[test]
    fn remove_set_removes_only_that_set() {
        let mut log = ExerciseLog::new();
        let id = log.add_exercise(bench(2), t0()).unwrap();
        let target = log.get(&id).unwrap().sets()[0].id().clone();
        assert!(log.remove_set(&id, &target));
        let remaining = log.get(&id).unwrap().sets();
        assert_eq!(remaining.len(), 1);
        assert_ne!(remaining[0].id(), &target);
    }

    #[test]
    fn remove_exercise_with_unknown_id_is_noop() {
        let mut log = ExerciseLog::new();
        log.add_exercise(bench(1), t0()).unwrap();
        assert!(!log.remove_exercise(&ExerciseId::new("missing").unwrap()));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn remove_exercise_drops_its_sets() {
        let mut log = ExerciseLog::new();
        let id = log.add_exercise(bench(3), t0()).unwrap();
        assert!(log.remove_exercise(&id));
        assert!(log.is_empty());
        assert_eq!(log.sets().count(), 0);
    }
}
