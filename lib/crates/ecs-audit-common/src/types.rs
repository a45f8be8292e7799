use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque handle (ARN) of a container instance registered to a cluster.
pub type InstanceRef = String;

/// Opaque handle (ARN) of a task.
pub type TaskRef = String;

/// A single remaining-capacity entry reported for a container instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemainingResource {
    pub name: String,
    pub integer_value: i32,
}

/// A described task and the container instance hosting it, if any.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskPlacement {
    pub task_ref: TaskRef,
    /// `None` when the task has not been placed on an instance.
    pub instance_ref: Option<InstanceRef>,
}

/// Detail record for a container instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContainerInstanceDescriptor {
    pub instance_ref: InstanceRef,
    pub ec2_instance_id: String,
    pub running_tasks_count: i32,
    /// Kept in the order the registry returned them.
    pub remaining_resources: Vec<RemainingResource>,
}

/// Result of comparing the cluster's instances with the family's placements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    AllGood,
    MissingWorkload,
}

impl AuditOutcome {
    #[must_use]
    pub fn is_all_good(self) -> bool {
        self == Self::AllGood
    }
}

/// Report projection of an instance that runs no task of the audited family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MissingInstance {
    pub ec2_instance_id: String,
    pub instance_ref: InstanceRef,
    pub running_tasks_count: i32,
    /// The selected remaining-resource entry, absent when the instance
    /// did not report one at the selected position or name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<RemainingResource>,
}

/// Full outcome of one audit run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub cluster: String,
    pub family: String,
    pub checked_at: DateTime<Utc>,
    pub cluster_instance_count: usize,
    pub service_instance_count: usize,
    pub outcome: AuditOutcome,
    pub missing: Vec<MissingInstance>,
}
