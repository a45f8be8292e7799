//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and the shared types crate —
//! never from `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;
use ecs_audit_common::types::{ContainerInstanceDescriptor, InstanceRef, TaskPlacement, TaskRef};

use crate::domain::AuditConfig;

// ── Cluster Registry Port ─────────────────────────────────────────────────────

/// The four registry calls an audit needs.
///
/// Each method is a single request with no retry and no pagination; errors
/// are returned unchanged so the caller can abort the run.
#[allow(async_fn_in_trait)]
pub trait ClusterRegistry {
    /// Container instance references registered to `cluster`.
    async fn list_container_instances(&self, cluster: &str) -> Result<Vec<InstanceRef>>;

    /// Running task references of `family` in `cluster`.
    async fn list_tasks(&self, cluster: &str, family: &str) -> Result<Vec<TaskRef>>;

    /// Describe `tasks` in one batched call.
    async fn describe_tasks(&self, cluster: &str, tasks: &[TaskRef]) -> Result<Vec<TaskPlacement>>;

    /// Describe `instances` in one batched call.
    async fn describe_container_instances(
        &self,
        cluster: &str,
        instances: &[InstanceRef],
    ) -> Result<Vec<ContainerInstanceDescriptor>>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts where the optional config file lives and how it is read.
pub trait ConfigStore {
    /// Load the config, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// fails validation.
    fn load(&self) -> Result<AuditConfig>;

    /// Path of the config file, whether or not it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
