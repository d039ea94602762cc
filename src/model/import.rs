//! Read-only JSON import of previously logged workouts.
//!
//! The file is trusted only for its shape. Records that fail validation are
//! dropped with a warning; the rest load normally. Nothing is ever written
//! back.

use crate::model::error::ImportError;
use crate::model::{BodyPart, ExerciseEntry, ExerciseId, ExerciseLog, SetEntry, SetId};
use chrono::{TimeZone, Utc};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct RawImport {
    #[serde(default)]
    exercises: Vec<RawExercise>,
}

#[derive(Debug, Deserialize)]
struct RawExercise {
    id: String,
    name: String,
    body_part: String,
    /// Epoch milliseconds.
    timestamp: i64,
    #[serde(default)]
    sets: Vec<RawSet>,
}

#[derive(Debug, Deserialize)]
struct RawSet {
    id: String,
    reps: f64,
    weight: f64,
}

/// Load an import file from disk.
pub fn load_import(path: &Path) -> Result<ExerciseLog, ImportError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let log = parse_import(&contents, path)?;
    info!(path = %path.display(), exercises = log.len(), "Imported workouts");
    Ok(log)
}

/// Parse import JSON. `path` is only used in messages.
pub fn parse_import(contents: &str, path: &Path) -> Result<ExerciseLog, ImportError> {
    let raw: RawImport = serde_json::from_str(contents).map_err(|e| ImportError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut log = ExerciseLog::new();
    for exercise in raw.exercises {
        if let Some(entry) = convert_exercise(exercise) {
            log.insert_imported(entry);
        }
    }
    Ok(log)
}

fn convert_exercise(raw: RawExercise) -> Option<ExerciseEntry> {
    let id = match ExerciseId::new(raw.id) {
        Ok(id) => id,
        Err(e) => {
            warn!(error = %e, "Dropping imported exercise");
            return None;
        }
    };
    let body_part: BodyPart = match raw.body_part.parse() {
        Ok(part) => part,
        Err(e) => {
            warn!(exercise_id = %id, error = %e, "Dropping imported exercise");
            return None;
        }
    };
    let Some(logged_at) = Utc.timestamp_millis_opt(raw.timestamp).single() else {
        warn!(exercise_id = %id, timestamp = raw.timestamp, "Dropping imported exercise with invalid timestamp");
        return None;
    };
    if raw.name.trim().is_empty() {
        warn!(exercise_id = %id, "Dropping imported exercise with empty name");
        return None;
    }

    let sets = raw
        .sets
        .into_iter()
        .filter_map(|set| convert_set(&id, set))
        .collect();

    Some(ExerciseEntry::new(
        id,
        raw.name.trim(),
        body_part,
        sets,
        logged_at,
    ))
}

fn convert_set(exercise_id: &ExerciseId, raw: RawSet) -> Option<SetEntry> {
    let set_id = match SetId::new(raw.id) {
        Ok(id) => id,
        Err(e) => {
            warn!(exercise_id = %exercise_id, error = %e, "Dropping imported set");
            return None;
        }
    };
    let Some(reps) = whole_reps(raw.reps) else {
        warn!(exercise_id = %exercise_id, set_id = %set_id, reps = raw.reps, "Dropping imported set with invalid reps");
        return None;
    };
    match SetEntry::from_id_timestamp(set_id.clone(), reps, raw.weight) {
        Ok(set) => Some(set),
        Err(e) => {
            warn!(exercise_id = %exercise_id, set_id = %set_id, error = %e, "Dropping imported set");
            None
        }
    }
}

/// Reps must be a positive whole number that fits in `u32`.
fn whole_reps(reps: f64) -> Option<u32> {
    if reps.is_finite() && reps >= 1.0 && reps.fract() == 0.0 && reps <= f64::from(u32::MAX) {
        Some(reps as u32)
    } else {
        None
    }
}
