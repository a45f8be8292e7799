//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: the ECS API adapter and
//! config file access.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod ecs;

pub use config::YamlConfigStore;
pub use ecs::EcsRegistry;
