//! Application service — the full audit use-case.
//!
//! Imports only from `crate::domain` and `crate::application`.
//! All I/O is routed through injected port traits.

use anyhow::Result;
use chrono::Utc;
use ecs_audit_common::types::{AuditOutcome, AuditReport};

use crate::application::ports::{ClusterRegistry, ProgressReporter};
use crate::application::services::cluster_instances::list_cluster_instances;
use crate::application::services::service_instances::resolve_service_instances;
use crate::domain::diff::{missing_instances, needs_comparison, to_missing_instance};
use crate::domain::request::AuditRequest;

/// Compare the cluster's instances with the family's placements.
///
/// Registry calls are made strictly in sequence. Descriptors are requested
/// only for the instances found missing, and only when there are any.
///
/// # Errors
///
/// Returns the first registry error; nothing fetched before it is reported.
pub async fn run_audit(
    registry: &impl ClusterRegistry,
    reporter: &impl ProgressReporter,
    request: &AuditRequest,
) -> Result<AuditReport> {
    let cluster = request.cluster.as_str();
    let family = request.family.as_str();

    let cluster_instances = list_cluster_instances(registry, reporter, cluster).await?;
    let service_instances = resolve_service_instances(registry, reporter, cluster, family).await?;

    let mut report = AuditReport {
        cluster: cluster.to_string(),
        family: family.to_string(),
        checked_at: Utc::now(),
        cluster_instance_count: cluster_instances.len(),
        service_instance_count: service_instances.len(),
        outcome: AuditOutcome::AllGood,
        missing: Vec::new(),
    };

    if !needs_comparison(&cluster_instances, &service_instances, request.strict) {
        tracing::info!(cluster, family, "instance counts match, skipping comparison");
        reporter.success("Instance and task counts match");
        return Ok(report);
    }

    let missing = missing_instances(&cluster_instances, &service_instances);
    if missing.is_empty() {
        reporter.success("Every instance runs the family");
        return Ok(report);
    }

    tracing::info!(cluster, family, missing = missing.len(), "instances missing the family");
    reporter.step(&format!("Describing {} instances", missing.len()));
    let descriptors = registry
        .describe_container_instances(cluster, &missing)
        .await?;

    if descriptors.len() < missing.len() {
        let undescribed = missing.len() - descriptors.len();
        tracing::warn!(cluster, undescribed, "registry did not describe every instance");
        reporter.warn(&format!("{undescribed} missing instances could not be described"));
    }

    report.outcome = AuditOutcome::MissingWorkload;
    report.missing = descriptors
        .iter()
        .map(|d| to_missing_instance(d, &request.resource))
        .collect();
    Ok(report)
}
