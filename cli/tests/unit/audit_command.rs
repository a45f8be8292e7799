//! Unit tests for the audit command handler and `Cli` wiring.

#![allow(clippy::expect_used)]

use clap::Parser;
use ecs_audit_cli::app::{AppContext, OutputFlags};
use ecs_audit_cli::cli::{Cli, exit_status};
use ecs_audit_cli::commands::audit::{self, AuditArgs};
use ecs_audit_cli::domain::AuditConfig;
use ecs_audit_cli::domain::error::AuditError;
use ecs_audit_cli::domain::request::ResourceSelector;
use ecs_audit_common::types::AuditOutcome;

use crate::mocks::{BrokenConfig, Call, FailOn, FakeRegistry, StaticConfig};

fn app(json: bool) -> AppContext {
    AppContext::new(OutputFlags {
        no_color: true,
        quiet: true,
        json,
    })
}

fn args(family: Option<&str>) -> AuditArgs {
    AuditArgs {
        family: family.map(str::to_string),
        ..AuditArgs::default()
    }
}

#[tokio::test]
async fn test_all_good_exits_zero() {
    let request = args(Some("web")).request(&AuditConfig::default()).expect("request");
    let registry = FakeRegistry::new(&["i1", "i2"], &["i1", "i2"]);

    let outcome = audit::run(&app(false), &request, &registry).await.expect("run");
    assert_eq!(outcome, AuditOutcome::AllGood);
    assert_eq!(exit_status(outcome), 0);
}

#[tokio::test]
async fn test_missing_instance_exits_one() {
    let request = args(Some("web")).request(&AuditConfig::default()).expect("request");
    let registry = FakeRegistry::new(&["i1", "i2", "i3"], &["i1", "i2"]);

    let outcome = audit::run(&app(false), &request, &registry).await.expect("run");
    assert_eq!(outcome, AuditOutcome::MissingWorkload);
    assert_eq!(exit_status(outcome), 1);
}

#[tokio::test]
async fn test_json_mode_returns_same_outcome() {
    let request = args(Some("web")).request(&AuditConfig::default()).expect("request");
    let registry = FakeRegistry::new(&["i1", "i2", "i3"], &["i1"]);

    let outcome = audit::run(&app(true), &request, &registry).await.expect("run");
    assert_eq!(outcome, AuditOutcome::MissingWorkload);
}

#[tokio::test]
async fn test_registry_error_propagates_from_command() {
    let request = args(Some("web")).request(&AuditConfig::default()).expect("request");
    let registry = FakeRegistry::new(&["i1"], &[]).failing(FailOn::ListTasks);

    let err = audit::run(&app(false), &request, &registry)
        .await
        .expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<AuditError>(),
        Some(AuditError::Registry { operation: "ListTasks", .. })
    ));
}

#[tokio::test]
async fn test_cluster_from_args_reaches_registry() {
    let mut a = args(Some("web"));
    a.cluster = Some("prod".to_string());
    let request = a.request(&AuditConfig::default()).expect("request");
    let registry = FakeRegistry::new(&[], &[]);

    audit::run(&app(true), &request, &registry).await.expect("run");
    assert_eq!(registry.calls()[0], Call::ListContainerInstances("prod".to_string()));
}

#[test]
fn test_args_resource_flag_beats_config() {
    let mut a = args(Some("web"));
    a.resource = Some("MEMORY".to_string());
    let config = AuditConfig {
        resource: Some("CPU".to_string()),
        ..AuditConfig::default()
    };
    let request = a.request(&config).expect("request");
    assert_eq!(request.resource, ResourceSelector::Named("MEMORY".to_string()));
}

fn cli_without_family() -> Cli {
    let mut cli = Cli::try_parse_from(["ecs-audit", "--cluster", "prod"]).expect("parse");
    // ECS_AUDIT_FAMILY may be set in the calling environment.
    cli.audit.family = None;
    cli
}

#[tokio::test]
async fn test_cli_without_family_fails_before_connecting() {
    let err = cli_without_family()
        .run_with_store(&StaticConfig(AuditConfig::default()))
        .await
        .expect_err("should fail");
    assert_eq!(err.to_string(), "family name required");
}

#[tokio::test]
async fn test_cli_without_family_fails_before_reading_config() {
    let err = cli_without_family()
        .run_with_store(&BrokenConfig)
        .await
        .expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<AuditError>(),
        Some(AuditError::FamilyRequired)
    ));
}

#[tokio::test]
async fn test_cli_with_family_surfaces_broken_config() {
    let cli = Cli::try_parse_from(["ecs-audit", "--family", "web"]).expect("parse");
    let err = cli.run_with_store(&BrokenConfig).await.expect_err("should fail");
    assert!(err.to_string().contains("cannot parse"));
}

#[tokio::test]
async fn test_cli_with_empty_family_fails() {
    let cli = Cli::try_parse_from(["ecs-audit", "--family", ""]).expect("parse");
    let err = cli
        .run_with_store(&StaticConfig(AuditConfig::default()))
        .await
        .expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<AuditError>(),
        Some(AuditError::FamilyRequired)
    ));
}
