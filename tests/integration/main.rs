//! Integration tests for the covgate CLI
//!
//! These tests run the binary against real files in a temporary directory,
//! covering the assert → update → assert cycle a CI pipeline goes through.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a covgate command
fn covgate() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("covgate"))
}

/// Helper to write the default limits file
fn write_limits(dir: &Path, content: &str) {
    fs::write(dir.join("limits.json"), content).expect("Failed to write limits");
}

/// Helper to write the default coverage report
fn write_report(dir: &Path, records: &[(&str, &str)]) {
    let content: String = records
        .iter()
        .map(|(id, pct)| format!("ok  \t{id}\t0.020s\tcoverage: {pct}% of statements\n"))
        .collect();
    fs::write(dir.join("coverage.txt"), content).expect("Failed to write report");
}

fn read_limits(dir: &Path) -> serde_json::Value {
    let content = fs::read_to_string(dir.join("limits.json")).expect("Failed to read limits");
    serde_json::from_str(&content).expect("limits.json is not valid JSON")
}

// =============================================================================
// BASIC CLI TESTS
// =============================================================================

#[test]
fn test_version() {
    covgate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("covgate"));
}

#[test]
fn test_help_lists_flags() {
    covgate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--update"))
        .stdout(predicate::str::contains("--limits"))
        .stdout(predicate::str::contains("--coverage"))
        .stdout(predicate::str::contains("--bypass"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    covgate().arg("--frobnicate").assert().failure();
}

// =============================================================================
// ASSERT MODE
// =============================================================================

#[test]
fn test_assert_passes_silently() {
    let temp = TempDir::new().unwrap();
    write_limits(temp.path(), r#"{"a": 80.0}"#);
    write_report(temp.path(), &[("a", "85.0")]);

    covgate()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp = TempDir::new().unwrap();
    write_limits(temp.path(), r#"{"a": 80.0}"#);
    write_report(temp.path(), &[("a", "85.0")]);

    covgate()
        .arg("--verbose")
        .env_remove("RUST_LOG")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("parsed 1 coverage record(s)"));
}

#[test]
fn test_assert_fails_below_limit() {
    let temp = TempDir::new().unwrap();
    write_limits(temp.path(), r#"{"a": 80.0}"#);
    write_report(temp.path(), &[("a", "75.0")]);

    covgate()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("coverage errors:"))
        .stdout(predicate::str::contains(
            "coverage for a is 75.00 but expected to be >= 80.00",
        ));
}

#[test]
fn test_assert_reports_every_violation() {
    let temp = TempDir::new().unwrap();
    write_limits(temp.path(), r#"{"pkg/a": 50.0, "pkg/b": 60.0, "pkg/c": 10.0}"#);
    write_report(temp.path(), &[("pkg/a", "40.0"), ("pkg/b", "59.9"), ("pkg/c", "90.0")]);

    covgate()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("coverage for pkg/a is 40.00 but expected to be >= 50.00"))
        .stdout(predicate::str::contains("coverage for pkg/b is 59.90 but expected to be >= 60.00"))
        .stdout(predicate::str::contains("pkg/c").not());
}

#[test]
fn test_bypass_exits_zero_but_reports() {
    let temp = TempDir::new().unwrap();
    write_limits(temp.path(), r#"{"a": 80.0}"#);
    write_report(temp.path(), &[("a", "75.0")]);

    covgate()
        .arg("--bypass")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "coverage for a is 75.00 but expected to be >= 80.00",
        ));
}

#[test]
fn test_custom_paths() {
    let temp = TempDir::new().unwrap();
    let ci = temp.path().join("ci");
    fs::create_dir_all(&ci).unwrap();
    fs::write(ci.join("floor.json"), r#"{"a": 80.0}"#).unwrap();
    fs::write(ci.join("cover.out"), "ok\ta\t0.1s\tcoverage: 10.0% of statements\n").unwrap();

    covgate()
        .args(["--limits", "ci/floor.json", "--coverage", "ci/cover.out"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("coverage for a is 10.00"));
}

// =============================================================================
// LOAD FAILURES
// =============================================================================

#[test]
fn test_missing_limits_fails_even_with_bypass() {
    let temp = TempDir::new().unwrap();
    write_report(temp.path(), &[("a", "75.0")]);

    covgate()
        .arg("--bypass")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("limits.json"));
}

#[test]
fn test_missing_report_fails() {
    let temp = TempDir::new().unwrap();
    write_limits(temp.path(), r#"{"a": 80.0}"#);

    covgate()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("coverage.txt"));
}

#[test]
fn test_malformed_limits_fails() {
    let temp = TempDir::new().unwrap();
    write_limits(temp.path(), "not json");
    write_report(temp.path(), &[("a", "75.0")]);

    covgate()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("malformed data"));
}

#[test]
fn test_malformed_report_fails() {
    let temp = TempDir::new().unwrap();
    write_limits(temp.path(), r#"{"a": 80.0}"#);
    fs::write(temp.path().join("coverage.txt"), "ok\ta\t0.1s\tcoverage: [no statements]\n")
        .unwrap();

    covgate()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("malformed data"));
}

// =============================================================================
// UPDATE MODE
// =============================================================================

#[test]
fn test_update_raises_and_adds() {
    let temp = TempDir::new().unwrap();
    write_limits(temp.path(), r#"{"a": 80.0}"#);
    write_report(temp.path(), &[("a", "85.0"), ("b", "50.0")]);

    covgate()
        .arg("--update")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("raised limit for a from 80.00 to 85.00"))
        .stdout(predicate::str::contains("added limit for b at 50.00"));

    assert_eq!(read_limits(temp.path()), serde_json::json!({"a": 85.0, "b": 50.0}));
}

#[test]
fn test_update_without_improvement_does_not_write() {
    let temp = TempDir::new().unwrap();
    let original = r#"{"a": 90.0}"#;
    write_limits(temp.path(), original);
    write_report(temp.path(), &[("a", "85.0")]);

    covgate()
        .arg("--update")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(temp.path().join("limits.json")).unwrap(), original);
}

#[test]
fn test_update_then_assert_passes() {
    let temp = TempDir::new().unwrap();
    write_limits(temp.path(), "{}");
    write_report(temp.path(), &[("pkg/a", "61.2"), ("pkg/b", "99.9")]);

    covgate().arg("--update").current_dir(temp.path()).assert().success();
    covgate()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    // Coverage drops: the recorded limit now catches it
    write_report(temp.path(), &[("pkg/a", "61.1"), ("pkg/b", "99.9")]);
    covgate()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("coverage for pkg/a is 61.10 but expected to be >= 61.20"));
}

#[test]
fn test_update_with_toml_limits() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("limits.toml"), "a = 80.0\n").unwrap();
    write_report(temp.path(), &[("a", "85.0")]);

    covgate()
        .args(["--update", "--limits", "limits.toml"])
        .current_dir(temp.path())
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("limits.toml")).unwrap();
    let limits: toml::Table = toml::from_str(&content).unwrap();
    assert_eq!(limits.get("a").and_then(toml::Value::as_float), Some(85.0));
}

// =============================================================================
// JSON OUTPUT
// =============================================================================

#[test]
fn test_json_output_on_violation() {
    let temp = TempDir::new().unwrap();
    write_limits(temp.path(), r#"{"a": 80.0}"#);
    write_report(temp.path(), &[("a", "75.0")]);

    let output = covgate()
        .arg("--json")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["passed"], false);
    assert_eq!(value["violations"][0]["id"], "a");
    assert_eq!(value["violations"][0]["observed"], 75.0);
    assert_eq!(value["violations"][0]["limit"], 80.0);
}

#[test]
fn test_json_output_on_load_failure() {
    let temp = TempDir::new().unwrap();

    let output = covgate()
        .arg("--json")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["kind"], "not_found");
}
