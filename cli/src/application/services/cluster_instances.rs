//! Application service — list every container instance in a cluster.

use anyhow::Result;
use ecs_audit_common::types::InstanceRef;

use crate::application::ports::{ClusterRegistry, ProgressReporter};

/// Container instance references registered to `cluster`, in registry order.
///
/// An empty cluster yields an empty list.
///
/// # Errors
///
/// Returns the registry error unchanged; there is no retry.
pub async fn list_cluster_instances(
    registry: &impl ClusterRegistry,
    reporter: &impl ProgressReporter,
    cluster: &str,
) -> Result<Vec<InstanceRef>> {
    reporter.step(&format!("Listing container instances in {cluster}"));
    let instances = registry.list_container_instances(cluster).await?;
    tracing::debug!(cluster, count = instances.len(), "listed cluster instances");
    Ok(instances)
}
