//! Configuration management

use crate::error::{DaybookError, Result};
use crate::infrastructure::persistence::DEFAULT_STORAGE_KEY;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    pub editor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    pub created: DateTime<Utc>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Slot keys become file names under `.daybook/slots`, so only
/// `[A-Za-z0-9_-]+` is accepted
pub fn validate_storage_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(DaybookError::Config(format!(
            "Invalid storage_key '{}': use letters, digits, '_' or '-'",
            key
        )));
    }
    Ok(())
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            storage_key: default_storage_key(),
            editor: Self::detect_default_editor(),
            export_dir: None,
            created: Utc::now(),
        }
    }

    /// Load config from .daybook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".daybook").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaybookError::NotDaybookDirectory(path.to_path_buf())
            } else {
                DaybookError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| DaybookError::Config(format!("Failed to parse config.toml: {}", e)))?;
        validate_storage_key(&config.storage_key)?;

        Ok(config)
    }

    /// Save config to .daybook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let daybook_dir = path.join(".daybook");
        let config_path = daybook_dir.join("config.toml");

        if !daybook_dir.exists() {
            fs::create_dir(&daybook_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
