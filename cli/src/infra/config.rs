//! Infrastructure implementation of the `ConfigStore` port.

use anyhow::{Result, anyhow};
use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::config::AuditConfig;
use crate::domain::error::ConfigError;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "ECS_AUDIT_CONFIG";

/// Production implementation of `ConfigStore` that reads a YAML file on disk.
pub struct YamlConfigStore;

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<AuditConfig> {
        let path = self.path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(AuditConfig::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: AuditConfig =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::Unparseable {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    fn path(&self) -> Result<PathBuf> {
        if let Ok(val) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(val));
        }
        let home = dirs::home_dir().ok_or_else(|| anyhow!("cannot determine home directory"))?;
        Ok(home.join(".ecs-audit").join("config.yaml"))
    }
}
