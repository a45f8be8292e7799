//! Resolved audit inputs.
//!
//! Pure functions only. Flag, environment, and config-file values are merged
//! here into a validated [`AuditRequest`] before any registry client exists.

use crate::domain::config::{AuditConfig, DEFAULT_CLUSTER, first_present};
use crate::domain::error::AuditError;

/// Which remaining-resource entry a report line shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceSelector {
    /// Entry at a fixed position in the list the registry returned.
    Position(usize),
    /// Entry whose name matches exactly.
    Named(String),
}

impl Default for ResourceSelector {
    /// Index 1 of the remaining-resources list. ECS returns
    /// `CPU, MEMORY, PORTS, PORTS_UDP`, so this is normally `MEMORY`.
    fn default() -> Self {
        Self::Position(1)
    }
}

/// A fully resolved, validated audit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRequest {
    pub cluster: String,
    pub family: String,
    /// Compare memberships even when the counts match.
    pub strict: bool,
    pub resource: ResourceSelector,
}

/// Raw inputs as they arrive from the command line (with env fallbacks
/// already applied by clap).
#[derive(Debug, Clone, Default)]
pub struct RequestInputs<'a> {
    pub cluster: Option<&'a str>,
    pub family: Option<&'a str>,
    pub resource: Option<&'a str>,
    pub strict: bool,
}

impl AuditRequest {
    /// Merge command-line inputs with the config file and validate them.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::FamilyRequired`] if no non-blank family was given.
    pub fn resolve(inputs: &RequestInputs<'_>, config: &AuditConfig) -> Result<Self, AuditError> {
        let family = validate_family(inputs.family)?;
        let cluster = first_present(inputs.cluster, config.cluster.as_deref())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CLUSTER.to_string());
        let resource = first_present(inputs.resource, config.resource.as_deref())
            .filter(|r| !r.trim().is_empty())
            .map_or_else(ResourceSelector::default, ResourceSelector::Named);

        Ok(Self {
            cluster,
            family,
            strict: inputs.strict,
            resource,
        })
    }
}

/// Validate the family identifier.
///
/// # Errors
///
/// Returns [`AuditError::FamilyRequired`] if the family is absent or blank.
pub fn validate_family(family: Option<&str>) -> Result<String, AuditError> {
    match family {
        Some(f) if !f.trim().is_empty() => Ok(f.to_string()),
        _ => Err(AuditError::FamilyRequired),
    }
}

/// Settings handed unchanged to the SDK config loader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub region: Option<String>,
    pub profile: Option<String>,
}

impl ConnectionSettings {
    #[must_use]
    pub fn resolve(region: Option<&str>, profile: Option<&str>, config: &AuditConfig) -> Self {
        Self {
            region: first_present(region, config.region.as_deref()),
            profile: first_present(profile, config.profile.as_deref()),
        }
    }
}
