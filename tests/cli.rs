//! Integration test: run the binary in its non-interactive modes.

use std::path::PathBuf;
use std::process::Command;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("liftlog-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_liftlog"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn report_mode_prints_json_and_exits() {
    let dir = scratch_dir("report");
    let config_path = dir.join("config.toml");
    let log_path = dir.join("liftlog.log");
    std::fs::write(
        &config_path,
        format!("log_file_path = {:?}\n", log_path.to_string_lossy()),
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_liftlog"))
        .args(["--import", "tests/fixtures/week_import.json", "--report"])
        .env("LIFTLOG_CONFIG", &config_path)
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["totals"]["sets"], 7);
    assert_eq!(report["weekly"]["days"].as_array().unwrap().len(), 7);
    assert!(log_path.exists());
}

#[test]
fn invalid_config_fails_startup() {
    let dir = scratch_dir("badconfig");
    let config_path = dir.join("config.toml");
    std::fs::write(&config_path, "no_such_key = 1\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_liftlog"))
        .arg("--report")
        .env("LIFTLOG_CONFIG", &config_path)
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ParseError"));
}
