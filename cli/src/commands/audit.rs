//! Audit command: find container instances that run no task of a family.

use anyhow::Result;
use clap::Args;
use ecs_audit_common::types::AuditOutcome;

use crate::app::AppContext;
use crate::application::ports::ClusterRegistry;
use crate::application::services::audit::run_audit;
use crate::domain::config::AuditConfig;
use crate::domain::error::AuditError;
use crate::domain::request::{AuditRequest, ConnectionSettings, RequestInputs};

/// Arguments for the audit.
#[derive(Args, Debug, Default)]
pub struct AuditArgs {
    /// Cluster to audit [default: default]
    #[arg(long, env = "ECS_AUDIT_CLUSTER")]
    pub cluster: Option<String>,

    /// Task family that every container instance should be running
    #[arg(long, env = "ECS_AUDIT_FAMILY")]
    pub family: Option<String>,

    /// AWS region (falls back to the SDK's region resolution)
    #[arg(long)]
    pub region: Option<String>,

    /// Named AWS profile
    #[arg(long)]
    pub profile: Option<String>,

    /// Report the remaining resource with this name instead of the second entry
    #[arg(long, value_name = "NAME")]
    pub resource: Option<String>,

    /// Compare instance memberships even when instance and task counts match
    ///
    /// Without this flag equal counts are reported as "All good" without
    /// comparing which instances the tasks run on.
    #[arg(long)]
    pub strict: bool,
}

impl AuditArgs {
    /// Merge the arguments with the config file into a validated request.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::FamilyRequired`] if no family was given.
    pub fn request(&self, config: &AuditConfig) -> Result<AuditRequest, AuditError> {
        let inputs = RequestInputs {
            cluster: self.cluster.as_deref(),
            family: self.family.as_deref(),
            resource: self.resource.as_deref(),
            strict: self.strict,
        };
        AuditRequest::resolve(&inputs, config)
    }

    /// Region and profile overrides for the SDK loader.
    #[must_use]
    pub fn connection(&self, config: &AuditConfig) -> ConnectionSettings {
        ConnectionSettings::resolve(self.region.as_deref(), self.profile.as_deref(), config)
    }
}

/// Run the audit against `registry` and render the report.
///
/// # Errors
///
/// Returns the first registry error, or an error if rendering fails.
pub async fn run(
    app: &AppContext,
    request: &AuditRequest,
    registry: &impl ClusterRegistry,
) -> Result<AuditOutcome> {
    let reporter = app.reporter();
    let report = run_audit(registry, &reporter, request).await?;
    reporter.finish();

    app.renderer().render_audit(&report)?;
    Ok(report.outcome)
}
