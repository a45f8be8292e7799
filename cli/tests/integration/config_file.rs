//! Integration tests for the optional YAML config file.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn ecs_audit_with_config(content: &str) -> (Command, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, content).expect("write config");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ecs-audit"));
    cmd.env("NO_COLOR", "1")
        .env_remove("ECS_AUDIT_FAMILY")
        .env_remove("ECS_AUDIT_CLUSTER")
        .env("ECS_AUDIT_CONFIG", &path);
    (cmd, dir)
}

#[test]
fn test_unparseable_config_is_fatal() {
    let (mut cmd, _dir) = ecs_audit_with_config("cluster: [unterminated\n");
    cmd.args(["--family", "web"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot parse"));
}

#[test]
fn test_blank_config_value_is_fatal() {
    let (mut cmd, _dir) = ecs_audit_with_config("cluster: \"\"\n");
    cmd.args(["--family", "web"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid value for cluster"));
}

#[test]
fn test_config_error_json_code() {
    let (mut cmd, _dir) = ecs_audit_with_config("region: \"  \"\n");
    let output = cmd
        .args(["--family", "web", "--json"])
        .assert()
        .code(2)
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(json["code"], "config_error");
}

#[test]
fn test_missing_family_reported_before_broken_config() {
    let (mut cmd, _dir) = ecs_audit_with_config("not: [valid\n");
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("family name required"))
        .stderr(predicate::str::contains("cannot parse").not());
}
