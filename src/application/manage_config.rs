//! Config management use case

use crate::error::{DaybookError, Result};
use crate::infrastructure::config::validate_storage_key;
use crate::infrastructure::{Config, Workspace};
use std::path::PathBuf;

/// Service for managing diary configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "storage_key" => Ok(config.storage_key),
            "editor" => Ok(config.editor),
            "export_dir" => Ok(config
                .export_dir
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DaybookError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: storage_key, editor, export_dir, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "storage_key" => {
                validate_storage_key(value)?;
                config.storage_key = value.to_string();
            }
            "editor" => {
                config.editor = value.to_string();
            }
            "export_dir" => {
                config.export_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "created" => {
                return Err(DaybookError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DaybookError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: storage_key, editor, export_dir",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}
