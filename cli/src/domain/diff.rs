//! Cluster-versus-service membership logic.
//!
//! Pure functions only — no I/O, no async.

use ecs_audit_common::types::{
    ContainerInstanceDescriptor, InstanceRef, MissingInstance, RemainingResource,
};

use crate::domain::request::ResourceSelector;

/// Decide whether the membership comparison runs at all.
///
/// Outside strict mode only the counts are compared: equal counts are
/// treated as a clean cluster without looking at the members. Duplicate
/// placements on one instance can therefore hide an empty instance.
#[must_use]
pub fn needs_comparison(
    cluster: &[InstanceRef],
    service: &[Option<InstanceRef>],
    strict: bool,
) -> bool {
    strict || cluster.len() != service.len()
}

/// Instances of `cluster` that no entry of `service` equals exactly.
///
/// Order follows `cluster`. Unplaced (`None`) service entries never match.
#[must_use]
pub fn missing_instances(
    cluster: &[InstanceRef],
    service: &[Option<InstanceRef>],
) -> Vec<InstanceRef> {
    cluster
        .iter()
        .filter(|instance| {
            !service
                .iter()
                .flatten()
                .any(|placed| placed == *instance)
        })
        .cloned()
        .collect()
}

/// Pick the remaining-resource entry a report line shows.
#[must_use]
pub fn select_resource(
    resources: &[RemainingResource],
    selector: &ResourceSelector,
) -> Option<RemainingResource> {
    match selector {
        ResourceSelector::Position(index) => resources.get(*index).cloned(),
        ResourceSelector::Named(name) => resources.iter().find(|r| &r.name == name).cloned(),
    }
}

/// Project a descriptor into its report form.
#[must_use]
pub fn to_missing_instance(
    descriptor: &ContainerInstanceDescriptor,
    selector: &ResourceSelector,
) -> MissingInstance {
    MissingInstance {
        ec2_instance_id: descriptor.ec2_instance_id.clone(),
        instance_ref: descriptor.instance_ref.clone(),
        running_tasks_count: descriptor.running_tasks_count,
        resource: select_resource(&descriptor.remaining_resources, selector),
    }
}
