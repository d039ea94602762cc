//! Domain model types (pure).
//!
//! Everything here is plain data plus pure functions over it. Time enters
//! only as an explicit `now` argument.

pub mod body_part;
pub mod calendar;
pub mod error;
pub mod exercise;
pub mod identifiers;
pub mod import;
pub mod key_action;
pub mod library;
pub mod log;
pub mod stats;

pub use body_part::{BodyPart, UnknownBodyPart};
pub use calendar::{DaySummary, MonthCalendar};
pub use error::{AppError, EntryRejected, ImportError};
pub use exercise::{ExerciseEntry, NewExercise, SetEntry, WeightUnit};
pub use identifiers::{ExerciseId, InvalidExerciseId, InvalidSetId, SetId};
pub use key_action::KeyAction;
pub use library::{LibraryEntry, LibraryFilter};
pub use log::ExerciseLog;
pub use stats::{
    DayVolume, DayWindow, LogTotals, MuscleBreakdown, MuscleShare, ProgressReport, TodaySummary,
    Trend, WeekOverWeek, WeeklyVolume,
};
