//! Error types for liftlog.
//!
//! Errors are `thiserror` enums composed with `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from startup and the main loop
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - [`ImportError`] - Workout import read/parse failures
//!   - `std::io::Error` - Terminal failures
//! - [`EntryRejected`] - Domain validation outcome for exercise and set creation
//!
//! # Recovery Strategy
//!
//! `EntryRejected` is never fatal. The UI treats it as a no-op and only
//! records it at `debug` level. Everything under `AppError` aborts startup
//! or ends the session after restoring the terminal.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file or subscriber could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Import file could not be loaded.
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors while loading a workout import file.
///
/// Problems with individual records are not errors: bad sets are dropped
/// and logged. Only an unreadable or syntactically invalid file fails.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file could not be read.
    #[error("Failed to read import file {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid import JSON.
    #[error("Invalid import JSON in {path}: {reason}")]
    Parse {
        /// Path with invalid content.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },
}

/// Why an exercise or set was not added.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntryRejected {
    /// Reps must be at least 1.
    #[error("Reps must be positive")]
    NonPositiveReps,

    /// Weight must be finite and not negative.
    #[error("Invalid weight: {0}")]
    InvalidWeight(f64),

    /// Exercise name is blank.
    #[error("Exercise name cannot be empty")]
    EmptyName,

    /// No exercise with that id exists.
    #[error("Unknown exercise: {0}")]
    UnknownExercise(String),
}
