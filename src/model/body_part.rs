//! Body part classification for exercises.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed eight-way classification every exercise belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BodyPart {
    /// Chest.
    Chest,
    /// Back.
    Back,
    /// Legs.
    Legs,
    /// Shoulders.
    Shoulders,
    /// Arms.
    Arms,
    /// Core.
    Core,
    /// Glutes.
    Glutes,
    /// Compound movements that train everything at once.
    #[serde(rename = "Full Body")]
    FullBody,
}

impl BodyPart {
    /// All body parts in canonical display order.
    pub const ALL: [BodyPart; 8] = [
        BodyPart::Chest,
        BodyPart::Back,
        BodyPart::Legs,
        BodyPart::Shoulders,
        BodyPart::Arms,
        BodyPart::Core,
        BodyPart::Glutes,
        BodyPart::FullBody,
    ];

    /// Axes of the muscle balance chart, in drawing order.
    pub const BALANCE_AXES: [BodyPart; 6] = [
        BodyPart::Chest,
        BodyPart::Back,
        BodyPart::Legs,
        BodyPart::Shoulders,
        BodyPart::Arms,
        BodyPart::Core,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            BodyPart::Chest => "Chest",
            BodyPart::Back => "Back",
            BodyPart::Legs => "Legs",
            BodyPart::Shoulders => "Shoulders",
            BodyPart::Arms => "Arms",
            BodyPart::Core => "Core",
            BodyPart::Glutes => "Glutes",
            BodyPart::FullBody => "Full Body",
        }
    }

    /// Short label used on the balance chart axes. Core is shown as "Abs".
    pub fn axis_label(self) -> &'static str {
        match self {
            BodyPart::Core => "Abs",
            other => other.label(),
        }
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|p| *p == self)
            .unwrap_or_default()
    }

    /// Next body part, wrapping from Full Body to Chest.
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous body part, wrapping from Chest to Full Body.
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown body part name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown body part: {0}")]
pub struct UnknownBodyPart(pub String);

impl FromStr for BodyPart {
    type Err = UnknownBodyPart;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| {
                p.label().eq_ignore_ascii_case(wanted)
                    || p.label().replace(' ', "").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownBodyPart(s.to_string()))
    }
}
