//! Application services — use-case orchestration.
//!
//! Each service module implements one step of the audit by composing domain
//! logic with port trait calls. Services import only from `crate::domain`
//! and `crate::application::ports` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

pub mod audit;
pub mod cluster_instances;
pub mod service_instances;
