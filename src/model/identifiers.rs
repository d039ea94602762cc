//! Identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time.
//! Generated identifiers have the shape `<millis>-<suffix>`, where the
//! suffix is a five character base36 sequence number.

use serde::{Deserialize, Serialize};
use std::fmt;

const SUFFIX_LEN: usize = 5;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Render `seq` as a fixed-width base36 suffix (wraps after 36^5 values).
fn base36_suffix(mut seq: u64) -> String {
    let mut out = [b'0'; SUFFIX_LEN];
    for slot in out.iter_mut().rev() {
        *slot = BASE36[(seq % 36) as usize];
        seq /= 36;
    }
    out.iter().map(|b| *b as char).collect()
}

fn generated(millis: i64, seq: u64) -> String {
    format!("{}-{}", millis, base36_suffix(seq))
}

/// Identifier of a logged exercise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExerciseId(String);

impl ExerciseId {
    /// Smart constructor: validates non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidExerciseId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidExerciseId::Empty);
        }
        Ok(Self(raw))
    }

    /// Build an id from a creation time and a sequence number.
    pub fn generate(millis: i64, seq: u64) -> Self {
        Self(generated(millis, seq))
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ExerciseId {
    type Error = InvalidExerciseId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExerciseId> for String {
    fn from(id: ExerciseId) -> Self {
        id.0
    }
}

/// Identifier of a single set. The leading segment encodes creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SetId(String);

impl SetId {
    /// Smart constructor: validates non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSetId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidSetId::Empty);
        }
        Ok(Self(raw))
    }

    /// Build an id from a creation time and a sequence number.
    pub fn generate(millis: i64, seq: u64) -> Self {
        Self(generated(millis, seq))
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the segment before the first `-` as epoch milliseconds.
    ///
    /// Returns `None` for ids that do not start with an integer.
    pub fn leading_millis(&self) -> Option<i64> {
        let head = self.0.split('-').next()?;
        head.trim().parse::<i64>().ok()
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SetId {
    type Error = InvalidSetId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SetId> for String {
    fn from(id: SetId) -> Self {
        id.0
    }
}

// ===== Error Types =====

/// Rejected exercise id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidExerciseId {
    /// Empty or whitespace-only id.
    #[error("Exercise ID cannot be empty")]
    Empty,
}

/// Rejected set id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSetId {
    /// Empty or whitespace-only id.
    #[error("Set ID cannot be empty")]
    Empty,
}

// ===== Tests =====
