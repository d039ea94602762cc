//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_liftlog_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("liftlog") && path_str.ends_with("config.toml"),
        "Path should contain 'liftlog' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_liftlog_log() {
    let path = default_log_path();
    assert!(path.to_string_lossy().ends_with("liftlog.log"));
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/liftlog.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = write_temp(
        "liftlog_test_config.toml",
        r#"
units = "lbs"
start_tab = "progress"
default_sets = 5
default_reps = 5
default_weight = 60.5
log_file_path = "/tmp/liftlog-test.log"
"#,
    );

    let config = load_config_file(&config_path).unwrap().unwrap();
    assert_eq!(config.units, Some(WeightUnit::Lbs));
    assert_eq!(config.start_tab, Some(Tab::Progress));
    assert_eq!(config.default_sets, Some(5));
    assert_eq!(config.default_reps, Some(5));
    assert_eq!(config.default_weight, Some(60.5));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/liftlog-test.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp("liftlog_test_invalid.toml", "this is not valid TOML ][}{");

    match load_config_file(&config_path) {
        Err(ConfigError::ParseError { path, .. }) => assert_eq!(path, config_path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"\n");
    assert!(result.is_err(), "Unknown keys must be rejected");
}

#[test]
fn config_file_rejects_unknown_unit() {
    let result: Result<ConfigFile, _> = toml::from_str("units = \"stone\"\n");
    assert!(result.is_err());
}

#[test]
fn merge_config_uses_defaults_when_none() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.default_sets, 3);
    assert_eq!(resolved.default_reps, 10);
    assert_eq!(resolved.default_weight, 0.0);
    assert_eq!(resolved.units, WeightUnit::Kg);
    assert_eq!(resolved.start_tab, Tab::Logger);
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let resolved = merge_config(Some(ConfigFile {
        default_reps: Some(8),
        ..ConfigFile::default()
    }));
    let defaults = ResolvedConfig::default();
    assert_eq!(resolved.default_reps, 8);
    assert_eq!(resolved.default_sets, defaults.default_sets);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

#[test]
fn form_defaults_follow_resolved_values() {
    let resolved = merge_config(Some(ConfigFile {
        default_sets: Some(4),
        default_weight: Some(22.5),
        ..ConfigFile::default()
    }));
    let form = resolved.form_defaults();
    assert_eq!(form.sets, 4);
    assert_eq!(form.reps, 10);
    assert_eq!(form.weight, 22.5);
}

/// RAII guard that removes the variable before and after the test.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(liftlog_env)]
fn apply_env_overrides_respects_units_and_tab() {
    let _units = EnvGuard::new(ENV_UNITS);
    let _tab = EnvGuard::new(ENV_START_TAB);
    env::set_var(ENV_UNITS, "LBS");
    env::set_var(ENV_START_TAB, "today");

    let result = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result.units, WeightUnit::Lbs);
    assert_eq!(result.start_tab, Tab::Today);
}

#[test]
#[serial(liftlog_env)]
fn apply_env_overrides_ignores_garbage() {
    let _units = EnvGuard::new(ENV_UNITS);
    let _tab = EnvGuard::new(ENV_START_TAB);
    env::set_var(ENV_UNITS, "stone");
    env::set_var(ENV_START_TAB, "settings");

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(liftlog_env)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _units = EnvGuard::new(ENV_UNITS);
    let _tab = EnvGuard::new(ENV_START_TAB);
    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(liftlog_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);
    let env_path = write_temp("liftlog_env_config.toml", "default_sets = 1\n");
    let cli_path = write_temp("liftlog_cli_config.toml", "default_sets = 2\n");
    env::set_var(ENV_CONFIG, &env_path);

    let config = load_config_with_precedence(Some(cli_path.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(config.default_sets, Some(2));

    fs::remove_file(env_path).ok();
    fs::remove_file(cli_path).ok();
}

#[test]
#[serial(liftlog_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);
    let env_path = write_temp("liftlog_env_only_config.toml", "start_tab = \"today\"\n");
    env::set_var(ENV_CONFIG, &env_path);

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.start_tab, Some(Tab::Today));

    fs::remove_file(env_path).ok();
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
}

#[test]
#[serial(liftlog_env)]
fn precedence_chain_full_defaults_to_cli() {
    let _units = EnvGuard::new(ENV_UNITS);
    let _tab = EnvGuard::new(ENV_START_TAB);

    // file sets lbs and today
    let file = ConfigFile {
        units: Some(WeightUnit::Lbs),
        start_tab: Some(Tab::Today),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(file));
    assert_eq!(resolved.units, WeightUnit::Lbs);

    // env flips units back
    env::set_var(ENV_UNITS, "kg");
    let resolved = apply_env_overrides(resolved);
    assert_eq!(resolved.units, WeightUnit::Kg);
    assert_eq!(resolved.start_tab, Tab::Today);

    // CLI wins last
    let resolved = apply_cli_overrides(resolved, Some(Tab::Progress), Some(WeightUnit::Lbs));
    assert_eq!(resolved.start_tab, Tab::Progress);
    assert_eq!(resolved.units, WeightUnit::Lbs);
}
