//! Error types for daybook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for daybook
#[derive(Debug, Error)]
pub enum DaybookError {
    #[error("Not a daybook directory: {0}")]
    NotDaybookDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("{0}")]
    Validation(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DaybookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DaybookError::NotDaybookDirectory(_) => 2,
            DaybookError::Validation(_) | DaybookError::InvalidDate(_) => 3,
            DaybookError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaybookError::NotDaybookDirectory(path) => {
                format!(
                    "Not a daybook directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'daybook init' in this directory to start a diary\n\
                    • Navigate to an existing daybook directory\n\
                    • Set DAYBOOK_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            DaybookError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • YYYY-MM-DD (e.g., 2024-03-05)\n\
                    • DD-MM-YYYY (e.g., 05-03-2024)\n\n\
                    Examples:\n\
                    daybook add --date yesterday --image photo.jpg\n\
                    daybook search --on 2024-03-05",
                    input
                )
            }
            DaybookError::EntryNotFound(id) => {
                format!(
                    "No entry with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'daybook list' to see entry ids\n\
                    • The entry may have been deleted or the diary cleared",
                    id
                )
            }
            DaybookError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: daybook config editor 'vim'\n\
                    • Skip the editor: daybook add --message 'Great day'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaybookError
pub type Result<T> = std::result::Result<T, DaybookError>;
