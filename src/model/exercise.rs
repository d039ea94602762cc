//! Exercise and set entries.

use crate::model::error::EntryRejected;
use crate::model::{BodyPart, ExerciseId, SetId};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Check a rep/weight pair against the set creation rules.
///
/// Reps must be positive; weight must be finite and non-negative.
pub fn validate_set(reps: u32, weight: f64) -> Result<(), EntryRejected> {
    if reps == 0 {
        return Err(EntryRejected::NonPositiveReps);
    }
    if !weight.is_finite() || weight < 0.0 {
        return Err(EntryRejected::InvalidWeight(weight));
    }
    Ok(())
}

// ===== SetEntry =====

/// One performed set: a rep/weight pair.
///
/// Immutable once created. `logged_at` is `None` only for imported sets
/// whose id did not carry a parseable timestamp; those sets are excluded
/// from every time-windowed statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct SetEntry {
    id: SetId,
    reps: u32,
    weight: f64,
    logged_at: Option<DateTime<Utc>>,
}

impl SetEntry {
    /// Create a validated set logged at `logged_at`.
    pub fn new(
        id: SetId,
        reps: u32,
        weight: f64,
        logged_at: DateTime<Utc>,
    ) -> Result<Self, EntryRejected> {
        validate_set(reps, weight)?;
        Ok(Self {
            id,
            reps,
            weight,
            logged_at: Some(logged_at),
        })
    }

    /// Create a validated set whose timestamp is recovered from its id.
    pub fn from_id_timestamp(id: SetId, reps: u32, weight: f64) -> Result<Self, EntryRejected> {
        validate_set(reps, weight)?;
        let logged_at = id
            .leading_millis()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single());
        Ok(Self {
            id,
            reps,
            weight,
            logged_at,
        })
    }

    /// Set id.
    pub fn id(&self) -> &SetId {
        &self.id
    }

    /// Repetitions.
    pub fn reps(&self) -> u32 {
        self.reps
    }

    /// Weight lifted, in the user's display unit.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// When the set was logged, if known.
    pub fn logged_at(&self) -> Option<DateTime<Utc>> {
        self.logged_at
    }

    /// Volume of this set: reps x weight.
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.weight
    }
}

// ===== ExerciseEntry =====

/// A logged exercise with its sets, newest set first.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseEntry {
    id: ExerciseId,
    name: String,
    body_part: BodyPart,
    sets: Vec<SetEntry>,
    logged_at: DateTime<Utc>,
}

impl ExerciseEntry {
    /// Assemble an entry. `sets` must already be newest-first.
    pub fn new(
        id: ExerciseId,
        name: impl Into<String>,
        body_part: BodyPart,
        sets: Vec<SetEntry>,
        logged_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            body_part,
            sets,
            logged_at,
        }
    }

    /// Exercise id.
    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    /// Exercise name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Body part trained.
    pub fn body_part(&self) -> BodyPart {
        self.body_part
    }

    /// Sets, newest first.
    pub fn sets(&self) -> &[SetEntry] {
        &self.sets
    }

    /// When the exercise was logged.
    pub fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }

    /// Sum of set volumes.
    pub fn volume(&self) -> f64 {
        self.sets.iter().map(SetEntry::volume).sum()
    }

    pub(crate) fn push_front_set(&mut self, set: SetEntry) {
        self.sets.insert(0, set);
    }

    pub(crate) fn retain_sets(&mut self, keep: impl FnMut(&SetEntry) -> bool) {
        self.sets.retain(keep);
    }
}

// ===== NewExercise =====

/// Request to log an exercise, optionally with identical pre-filled sets.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    /// Exercise name; trimmed before use.
    pub name: String,
    /// Body part trained.
    pub body_part: BodyPart,
    /// Number of identical sets to create.
    pub sets: u32,
    /// Reps for each pre-filled set.
    pub reps: u32,
    /// Weight for each pre-filled set.
    pub weight: f64,
}

impl NewExercise {
    /// Exercise with no sets yet.
    pub fn empty(name: impl Into<String>, body_part: BodyPart) -> Self {
        Self {
            name: name.into(),
            body_part,
            sets: 0,
            reps: 0,
            weight: 0.0,
        }
    }

    /// Check the request. The set template is only validated when sets are requested.
    pub fn validate(&self) -> Result<(), EntryRejected> {
        if self.name.trim().is_empty() {
            return Err(EntryRejected::EmptyName);
        }
        if self.sets > 0 {
            validate_set(self.reps, self.weight)?;
        }
        Ok(())
    }
}

// ===== WeightUnit =====

/// Display unit for weights. Stored numbers are never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms.
    #[default]
    Kg,
    /// Pounds.
    Lbs,
}

impl WeightUnit {
    /// Short suffix, e.g. "kg".
    pub fn suffix(self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }

    /// The other unit.
    pub fn toggled(self) -> Self {
        match self {
            WeightUnit::Kg => WeightUnit::Lbs,
            WeightUnit::Lbs => WeightUnit::Kg,
        }
    }

    /// Parse "kg" or "lbs" (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kg" => Some(WeightUnit::Kg),
            "lbs" | "lb" => Some(WeightUnit::Lbs),
            _ => None,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
