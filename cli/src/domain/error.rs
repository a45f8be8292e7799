//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or the AWS SDK.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Audit errors ──────────────────────────────────────────────────────────────

/// Errors that abort an audit run.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("family name required")]
    FamilyRequired,

    /// A registry call failed. The SDK error text is surfaced unchanged.
    #[error("{operation} failed for cluster '{cluster}': {message}")]
    Registry {
        operation: &'static str,
        cluster: String,
        message: String,
    },
}

impl AuditError {
    /// Stable machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::FamilyRequired => "family_required",
            Self::Registry { .. } => "registry_error",
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to loading and validating the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("cannot parse {path}: {message}")]
    Unparseable { path: String, message: String },

    #[error("Invalid value for {key}: {value:?}\n\n{hint}")]
    InvalidValue {
        key: String,
        value: String,
        hint: String,
    },
}

impl ConfigError {
    /// Stable machine-readable code used by `--json` error output.
    pub const CODE: &'static str = "config_error";
}
