//! Integration tests for argument parsing, exit codes and error output.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Binary with a clean environment: no color, no ambient family/cluster,
/// and a config path that does not exist.
fn ecs_audit() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ecs-audit"));
    cmd.env("NO_COLOR", "1")
        .env_remove("ECS_AUDIT_FAMILY")
        .env_remove("ECS_AUDIT_CLUSTER")
        .env_remove("RUST_LOG")
        .env("ECS_AUDIT_CONFIG", "/nonexistent/ecs-audit/config.yaml");
    cmd
}

#[test]
fn test_help_shows_options() {
    ecs_audit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--cluster"))
        .stdout(predicate::str::contains("--family"))
        .stdout(predicate::str::contains("--strict"));
}

#[test]
fn test_version_flag_shows_version() {
    ecs_audit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ecs-audit"));
}

#[test]
fn test_missing_family_is_fatal() {
    ecs_audit()
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("family name required"));
}

#[test]
fn test_empty_family_is_fatal() {
    ecs_audit()
        .args(["--cluster", "prod", "--family", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("family name required"));
}

#[test]
fn test_blank_family_from_env_is_fatal() {
    ecs_audit()
        .env("ECS_AUDIT_FAMILY", "   ")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("family name required"));
}

#[test]
fn test_missing_family_json_error_object() {
    let output = ecs_audit()
        .arg("--json")
        .assert()
        .code(2)
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(json["error"], true);
    assert_eq!(json["code"], "family_required");
    assert_eq!(json["message"], "family name required");
}

#[test]
fn test_unknown_flag_is_usage_error() {
    ecs_audit()
        .args(["--family", "web", "--bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bogus"));
}
