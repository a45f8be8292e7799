//! Application service — resolve which instances host a task family.

use anyhow::Result;
use ecs_audit_common::types::InstanceRef;

use crate::application::ports::{ClusterRegistry, ProgressReporter};

/// Hosting instance of every running task of `family` in `cluster`.
///
/// One entry per described task, so an instance running two tasks of the
/// family appears twice. Tasks without an assigned instance yield `None`.
/// When the family has no running tasks the result is empty and no describe
/// call is made.
///
/// # Errors
///
/// Returns the registry error from either the list or the describe call.
pub async fn resolve_service_instances(
    registry: &impl ClusterRegistry,
    reporter: &impl ProgressReporter,
    cluster: &str,
    family: &str,
) -> Result<Vec<Option<InstanceRef>>> {
    reporter.step(&format!("Listing {family} tasks"));
    let tasks = registry.list_tasks(cluster, family).await?;
    tracing::debug!(cluster, family, count = tasks.len(), "listed family tasks");

    if tasks.is_empty() {
        return Ok(Vec::new());
    }

    reporter.step(&format!("Describing {} {family} tasks", tasks.len()));
    let placements = registry.describe_tasks(cluster, &tasks).await?;
    let unplaced = placements.iter().filter(|p| p.instance_ref.is_none()).count();
    if unplaced > 0 {
        tracing::debug!(cluster, family, unplaced, "tasks without a container instance");
    }

    Ok(placements.into_iter().map(|p| p.instance_ref).collect())
}
