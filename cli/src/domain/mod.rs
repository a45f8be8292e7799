//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or the AWS SDK.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod diff;
pub mod error;
pub mod request;

pub use config::{AuditConfig, DEFAULT_CLUSTER};
pub use diff::{missing_instances, needs_comparison, select_resource, to_missing_instance};
pub use error::{AuditError, ConfigError};
pub use request::{AuditRequest, ConnectionSettings, RequestInputs, ResourceSelector};
