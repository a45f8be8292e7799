//! Infrastructure implementation of the `ClusterRegistry` port backed by
//! the Amazon ECS API.
//!
//! Credential and region resolution are left to the SDK's default provider
//! chain; only an explicit region or profile override is applied.

use anyhow::Result;
use aws_sdk_ecs::Client;
use aws_sdk_ecs::error::DisplayErrorContext;
use aws_sdk_ecs::types::{ContainerInstance, Failure, Task};
use ecs_audit_common::types::{
    ContainerInstanceDescriptor, InstanceRef, RemainingResource, TaskPlacement, TaskRef,
};

use crate::application::ports::ClusterRegistry;
use crate::domain::error::AuditError;
use crate::domain::request::ConnectionSettings;

/// ECS-backed cluster registry. One client per run.
pub struct EcsRegistry {
    client: Client,
}

impl EcsRegistry {
    /// Load the SDK config and build a client.
    ///
    /// No request is sent here; credentials are resolved lazily on the
    /// first call.
    pub async fn connect(settings: &ConnectionSettings) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &settings.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(profile) = &settings.profile {
            loader = loader.profile_name(profile);
        }
        let config = loader.load().await;
        tracing::debug!(region = ?config.region(), "loaded AWS config");
        Self::from_client(Client::new(&config))
    }

    /// Wrap an already configured client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl ClusterRegistry for EcsRegistry {
    async fn list_container_instances(&self, cluster: &str) -> Result<Vec<InstanceRef>> {
        let resp = self
            .client
            .list_container_instances()
            .cluster(cluster)
            .send()
            .await
            .map_err(|e| registry_error("ListContainerInstances", cluster, &e))?;

        Ok(resp.container_instance_arns().to_vec())
    }

    async fn list_tasks(&self, cluster: &str, family: &str) -> Result<Vec<TaskRef>> {
        let resp = self
            .client
            .list_tasks()
            .cluster(cluster)
            .family(family)
            .send()
            .await
            .map_err(|e| registry_error("ListTasks", cluster, &e))?;

        Ok(resp.task_arns().to_vec())
    }

    async fn describe_tasks(&self, cluster: &str, tasks: &[TaskRef]) -> Result<Vec<TaskPlacement>> {
        let resp = self
            .client
            .describe_tasks()
            .cluster(cluster)
            .set_tasks(Some(tasks.to_vec()))
            .send()
            .await
            .map_err(|e| registry_error("DescribeTasks", cluster, &e))?;

        log_failures("DescribeTasks", resp.failures());
        Ok(resp.tasks().iter().map(task_placement).collect())
    }

    async fn describe_container_instances(
        &self,
        cluster: &str,
        instances: &[InstanceRef],
    ) -> Result<Vec<ContainerInstanceDescriptor>> {
        let resp = self
            .client
            .describe_container_instances()
            .cluster(cluster)
            .set_container_instances(Some(instances.to_vec()))
            .send()
            .await
            .map_err(|e| registry_error("DescribeContainerInstances", cluster, &e))?;

        log_failures("DescribeContainerInstances", resp.failures());
        Ok(resp.container_instances().iter().map(descriptor).collect())
    }
}

fn registry_error(
    operation: &'static str,
    cluster: &str,
    err: &impl std::error::Error,
) -> anyhow::Error {
    AuditError::Registry {
        operation,
        cluster: cluster.to_string(),
        message: DisplayErrorContext(err).to_string(),
    }
    .into()
}

/// Per-item failures do not fail the call; they are only logged.
fn log_failures(operation: &str, failures: &[Failure]) {
    for f in failures {
        tracing::warn!(
            operation,
            arn = f.arn().unwrap_or("unknown"),
            reason = f.reason().unwrap_or("unknown"),
            "registry reported a failure"
        );
    }
}

fn task_placement(task: &Task) -> TaskPlacement {
    TaskPlacement {
        task_ref: task.task_arn().unwrap_or_default().to_string(),
        instance_ref: task.container_instance_arn().map(str::to_string),
    }
}

fn descriptor(instance: &ContainerInstance) -> ContainerInstanceDescriptor {
    ContainerInstanceDescriptor {
        instance_ref: instance
            .container_instance_arn()
            .unwrap_or_default()
            .to_string(),
        ec2_instance_id: instance.ec2_instance_id().unwrap_or_default().to_string(),
        running_tasks_count: instance.running_tasks_count(),
        remaining_resources: instance
            .remaining_resources()
            .iter()
            .map(|r| RemainingResource {
                name: r.name().unwrap_or_default().to_string(),
                integer_value: r.integer_value(),
            })
            .collect(),
    }
}
