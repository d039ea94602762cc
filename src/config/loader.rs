//! Configuration file loading with precedence handling.

use crate::model::WeightUnit;
use crate::state::{FormDefaults, Tab};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "LIFTLOG_CONFIG";
/// Environment variable overriding the weight unit.
pub const ENV_UNITS: &str = "LIFTLOG_UNITS";
/// Environment variable overriding the start tab.
pub const ENV_START_TAB: &str = "LIFTLOG_START_TAB";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/liftlog/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Weight unit label: "kg" or "lbs".
    #[serde(default)]
    pub units: Option<WeightUnit>,

    /// Tab shown on startup: "logger", "today" or "progress".
    #[serde(default)]
    pub start_tab: Option<Tab>,

    /// Sets pre-filled in the add-exercise form.
    #[serde(default)]
    pub default_sets: Option<u32>,

    /// Reps pre-filled in the add-exercise form.
    #[serde(default)]
    pub default_reps: Option<u32>,

    /// Weight pre-filled in the add-exercise form.
    #[serde(default)]
    pub default_weight: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Weight unit label.
    pub units: WeightUnit,
    /// Tab shown on startup.
    pub start_tab: Tab,
    /// Sets pre-filled in the add-exercise form.
    pub default_sets: u32,
    /// Reps pre-filled in the add-exercise form.
    pub default_reps: u32,
    /// Weight pre-filled in the add-exercise form.
    pub default_weight: f64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let form = FormDefaults::default();
        Self {
            units: WeightUnit::Kg,
            start_tab: Tab::Logger,
            default_sets: form.sets,
            default_reps: form.reps,
            default_weight: form.weight,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Pre-fill values for the add-exercise form.
    pub fn form_defaults(&self) -> FormDefaults {
        FormDefaults {
            sets: self.default_sets,
            reps: self.default_reps,
            weight: self.default_weight,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/liftlog/liftlog.log` on Linux, or the platform
/// equivalent. Falls back to the current directory when no state directory
/// exists (macOS and Windows have none).
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("liftlog").join("liftlog.log")
    } else if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join("liftlog").join("liftlog.log")
    } else {
        PathBuf::from("liftlog.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/liftlog/config.toml` on Linux.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("liftlog").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `LIFTLOG_CONFIG` environment variable
/// 3. Default path `~/.config/liftlog/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        units: config.units.unwrap_or(defaults.units),
        start_tab: config.start_tab.unwrap_or(defaults.start_tab),
        default_sets: config.default_sets.unwrap_or(defaults.default_sets),
        default_reps: config.default_reps.unwrap_or(defaults.default_reps),
        default_weight: config.default_weight.unwrap_or(defaults.default_weight),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `LIFTLOG_UNITS` and `LIFTLOG_START_TAB`. Unrecognised values are
/// ignored; logging is not initialised yet at this point.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(units) = std::env::var(ENV_UNITS)
        .ok()
        .and_then(|v| WeightUnit::parse(&v))
    {
        config.units = units;
    }

    if let Some(tab) = std::env::var(ENV_START_TAB)
        .ok()
        .and_then(|v| v.parse::<Tab>().ok())
    {
        config.start_tab = tab;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    tab_override: Option<Tab>,
    units_override: Option<WeightUnit>,
) -> ResolvedConfig {
    if let Some(tab) = tab_override {
        config.start_tab = tab;
    }

    if let Some(units) = units_override {
        config.units = units;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
