//! liftlog - Entry Point

use chrono::Local;
use clap::Parser;
use liftlog::config::{self, ResolvedConfig};
use liftlog::model::import::load_import;
use liftlog::model::{AppError, ExerciseLog, ProgressReport, WeightUnit};
use liftlog::state::Tab;
use std::path::PathBuf;
use tracing::info;

/// liftlog - terminal workout logger with weekly statistics
#[derive(Parser, Debug)]
#[command(name = "liftlog")]
#[command(version)]
#[command(about = "Log workouts in the terminal and track weekly volume and muscle balance")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tab shown on startup: logger, today or progress
    #[arg(long)]
    pub tab: Option<Tab>,

    /// Weight unit label: kg or lbs
    #[arg(long, value_parser = parse_units)]
    pub units: Option<WeightUnit>,

    /// Load exercises from a JSON export (read-only)
    #[arg(long)]
    pub import: Option<PathBuf>,

    /// Print the progress report as JSON and exit
    #[arg(long)]
    pub report: bool,
}

fn parse_units(s: &str) -> Result<WeightUnit, String> {
    WeightUnit::parse(s).ok_or_else(|| format!("unknown unit '{s}', expected kg or lbs"))
}

/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file);
    let with_env = config::apply_env_overrides(merged);
    Ok(config::apply_cli_overrides(with_env, args.tab, args.units))
}

fn load_log(args: &Args) -> Result<ExerciseLog, AppError> {
    match &args.import {
        Some(path) => Ok(load_import(path)?),
        None => Ok(ExerciseLog::new()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(&args)?;

    liftlog::logging::init(&config.log_file_path).map_err(AppError::from)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let log = load_log(&args)?;

    if args.report {
        let report = ProgressReport::compute(&log, &Local::now());
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    liftlog::view::run(&config, log)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["liftlog", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["liftlog", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["liftlog"]);
        assert_eq!(args.config, None);
        assert_eq!(args.tab, None);
        assert_eq!(args.units, None);
        assert_eq!(args.import, None);
        assert!(!args.report);
    }

    #[test]
    fn test_tab_flag() {
        let args = Args::parse_from(["liftlog", "--tab", "progress"]);
        assert_eq!(args.tab, Some(Tab::Progress));
    }

    #[test]
    fn test_tab_invalid_rejects() {
        let result = Args::try_parse_from(["liftlog", "--tab", "settings"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_units_flag() {
        let args = Args::parse_from(["liftlog", "--units", "lbs"]);
        assert_eq!(args.units, Some(WeightUnit::Lbs));
    }

    #[test]
    fn test_units_invalid_rejects() {
        let result = Args::try_parse_from(["liftlog", "--units", "stone"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_import_and_report() {
        let args = Args::parse_from(["liftlog", "--import", "log.json", "--report"]);
        assert_eq!(args.import, Some(PathBuf::from("log.json")));
        assert!(args.report);
    }

    #[test]
    fn test_cli_overrides_win_over_defaults() {
        let args = Args::parse_from(["liftlog", "--tab", "today", "--units", "lbs"]);
        let resolved = config::apply_cli_overrides(
            ResolvedConfig::default(),
            args.tab,
            args.units,
        );
        assert_eq!(resolved.start_tab, Tab::Today);
        assert_eq!(resolved.units, WeightUnit::Lbs);
    }

    #[test]
    fn test_load_log_without_import_is_empty() {
        let args = Args::parse_from(["liftlog"]);
        assert!(load_log(&args).unwrap().is_empty());
    }
}
