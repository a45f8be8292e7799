//! JSON output helpers.
//!
//! Provides the report renderer and the error-object formatter used by all
//! `--json` code paths.

use anyhow::{Context, Result};
use ecs_audit_common::types::AuditReport;

use crate::domain::error::{AuditError, ConfigError};

/// Renders audit reports as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render an audit report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_audit(&self, report: &AuditReport) -> Result<()> {
        println!("{}", format_report(report)?);
        Ok(())
    }
}

/// Serialize an audit report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_report(report: &AuditReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("JSON serialization failed")
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen in
/// practice — only strings and a bool are serialized).
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Machine-readable code for an error anywhere in the chain.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<AuditError>() {
            return e.code();
        }
        if cause.is::<ConfigError>() {
            return ConfigError::CODE;
        }
    }
    "internal"
}
