//! Domain types and validators for ecs-audit configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Cluster audited when neither a flag, env var, nor config value names one.
pub const DEFAULT_CLUSTER: &str = "default";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.ecs-audit/config.yaml`.
///
/// Every key is optional. Command-line flags and environment variables take
/// precedence over values set here.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AuditConfig {
    /// Cluster to audit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// AWS region handed to the SDK loader.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Named AWS profile handed to the SDK loader.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Remaining-resource name to report instead of the positional entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

impl AuditConfig {
    /// Reject keys that are present but blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first blank key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("cluster", &self.cluster),
            ("region", &self.region),
            ("profile", &self.profile),
            ("resource", &self.resource),
        ] {
            if let Some(v) = value
                && v.trim().is_empty()
            {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: v.clone(),
                    hint: format!("Remove the '{key}' key or give it a non-empty value."),
                });
            }
        }
        Ok(())
    }
}

/// Pick the first present value: flag, then config file.
///
/// Environment variables are folded into the flag value by clap before this
/// is called.
#[must_use]
pub fn first_present(flag: Option<&str>, config: Option<&str>) -> Option<String> {
    flag.or(config).map(str::to_string)
}

// ── Unit tests ───────────────────────────────────────────────────────────────
