//! Basic CLI E2E tests.
//!
//! Tests run the built binary against a throwaway data directory and verify
//! outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(home: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_betterrest"))
        .args(args)
        .env("BETTERREST_HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn write_model(dir: &Path, json: &str) -> String {
    let path = dir.join("model.json");
    std::fs::write(&path, json).unwrap();
    path.display().to_string()
}

#[test]
fn test_estimate_with_defaults() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(home.path(), &["estimate"]);
    assert!(output.0 == 0, "Estimate failed: {}", output.2);
    assert!(output.1.contains("Your ideal bedtime is..."));
    // 07:00 - (8h + 15min) with the bundled model
    assert!(output.1.contains("10:45 PM"), "got: {}", output.1);
}

#[test]
fn test_estimate_json_24h() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(
        home.path(),
        &[
            "estimate", "--wake", "00:30", "--sleep", "8", "--coffee", "2", "--format", "24h",
            "--json",
        ],
    );
    assert!(output.0 == 0, "Estimate JSON failed: {}", output.2);

    let parsed: serde_json::Value = serde_json::from_str(&output.1).unwrap();
    assert_eq!(parsed["bedtime"], "16:00");
    assert_eq!(parsed["hour"], 16);
    assert_eq!(parsed["minute"], 0);
    assert_eq!(parsed["days_before_wake"], 1);
    assert_eq!(parsed["predicted_sleep_seconds"], 30_600);
}

#[test]
fn test_estimate_with_model_artifact() {
    let home = tempfile::tempdir().unwrap();
    let model = write_model(
        home.path(),
        r#"{ "intercept": 0.0, "wake": 0.0, "sleep": 3600.0, "coffee": 0.0 }"#,
    );
    let output = run_cli(
        home.path(),
        &["estimate", "--wake", "07:00", "--coffee", "2", "--model", &model, "--format", "24h"],
    );
    assert!(output.0 == 0, "Estimate failed: {}", output.2);
    assert!(output.1.contains("23:00"), "got: {}", output.1);
}

#[test]
fn test_estimate_broken_model_reports_generic_failure() {
    let home = tempfile::tempdir().unwrap();
    let model = write_model(home.path(), "{ not json");
    let output = run_cli(home.path(), &["estimate", "--model", &model]);
    assert!(output.0 != 0, "Estimate should fail");
    assert!(output.2.contains("Sorry, there was an error during calculation"));
    assert!(!output.1.contains("Your ideal bedtime is"));
}

#[test]
fn test_estimate_rejects_malformed_wake() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(home.path(), &["estimate", "--wake", "7"]);
    assert!(output.0 != 0, "Malformed wake-up time should fail");
    assert!(output.2.contains("Malformed wake-up time"));
}

#[test]
fn test_estimate_rejects_out_of_range_sleep() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(home.path(), &["estimate", "--sleep", "13"]);
    assert!(output.0 != 0, "Sleep above 12 hours should fail");
}

#[test]
fn test_sweep_lists_every_coffee_count() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(home.path(), &["sweep", "--json"]);
    assert!(output.0 == 0, "Sweep failed: {}", output.2);

    let parsed: serde_json::Value = serde_json::from_str(&output.1).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0]["coffee"], 1);
    assert_eq!(rows[0]["bedtime"], "10:45 PM");
    assert_eq!(rows[11]["bedtime"], "8:00 PM");
}

#[test]
fn test_config_set_get_roundtrip() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(home.path(), &["config", "set", "defaults.coffee", "3"]);
    assert!(output.0 == 0, "Config set failed: {}", output.2);

    let output = run_cli(home.path(), &["config", "get", "defaults.coffee"]);
    assert!(output.0 == 0, "Config get failed");
    assert_eq!(output.1.trim(), "3");
}

#[test]
fn test_config_defaults_feed_estimate() {
    let home = tempfile::tempdir().unwrap();
    let _ = run_cli(home.path(), &["config", "set", "display.time_format", "24h"]);
    let _ = run_cli(home.path(), &["config", "set", "defaults.wake_up", "06:00"]);
    let output = run_cli(home.path(), &["estimate"]);
    assert!(output.0 == 0, "Estimate failed: {}", output.2);
    assert!(output.1.contains("21:45"), "got: {}", output.1);
}

#[test]
fn test_config_get_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(home.path(), &["config", "get", "defaults.nope"]);
    assert!(output.0 != 0, "Unknown key should fail");
}

#[test]
fn test_config_list_and_reset() {
    let home = tempfile::tempdir().unwrap();
    let _ = run_cli(home.path(), &["config", "set", "defaults.coffee", "5"]);
    let output = run_cli(home.path(), &["config", "reset"]);
    assert!(output.0 == 0, "Config reset failed");

    let output = run_cli(home.path(), &["config", "list"]);
    assert!(output.0 == 0, "Config list failed");
    let parsed: serde_json::Value = serde_json::from_str(&output.1).unwrap();
    assert_eq!(parsed["defaults"]["coffee"], 1);
}

#[test]
fn test_model_show_bundled() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(home.path(), &["model", "show"]);
    assert!(output.0 == 0, "Model show failed: {}", output.2);
    assert!(output.1.contains("source: bundled"));
    assert!(output.1.contains("\"coffee\": 900.0"));
}

#[test]
fn test_config_clearing_model_path_restores_bundled_model() {
    let home = tempfile::tempdir().unwrap();
    let model = write_model(
        home.path(),
        r#"{ "intercept": 0.0, "wake": 0.0, "sleep": 3600.0, "coffee": 0.0 }"#,
    );
    let _ = run_cli(home.path(), &["config", "set", "model.path", &model]);
    let output = run_cli(home.path(), &["config", "set", "model.path", ""]);
    assert!(output.0 == 0, "Config clear failed: {}", output.2);

    let output = run_cli(home.path(), &["estimate"]);
    assert!(output.0 == 0, "Estimate failed: {}", output.2);
    assert!(output.1.contains("10:45 PM"), "got: {}", output.1);
}
