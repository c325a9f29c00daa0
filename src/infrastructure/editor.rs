//! Editor integration for writing entry text

use crate::error::{DaybookError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Session for composing text in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Seed `scratch` with `initial`, open it, wait for the editor to exit
    /// and return what was saved. The scratch file is removed afterwards.
    pub fn compose(&self, scratch: &Path, initial: &str) -> Result<String> {
        fs::write(scratch, initial)?;
        let outcome = self.run(scratch);
        let text = outcome.and_then(|_| fs::read_to_string(scratch).map_err(DaybookError::Io));
        let _ = fs::remove_file(scratch);
        text
    }

    fn run(&self, file_path: &Path) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.push(file_path.to_string_lossy().to_string());

        // cmd /C finds .bat and .cmd editors
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&args).status();

        let status = status.map_err(|e| {
            DaybookError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(DaybookError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }
        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        let Some((program, rest)) = parts.split_first() else {
            let fallback = if cfg!(windows) { "notepad" } else { "nano" };
            return (fallback.to_string(), vec![]);
        };

        (
            program.to_string(),
            rest.iter().map(|s| s.to_string()).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_simple() {
        let session = EditorSession::new("vim".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "vim");
        assert!(args.is_empty());
    }

    #[test]
    fn test_parse_command_with_args() {
        let session = EditorSession::new("  code  -w ".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "code");
        assert_eq!(args, vec!["-w"]);
    }

    #[test]
    fn test_parse_command_empty_falls_back() {
        let session = EditorSession::new(String::new());
        let (program, args) = session.parse_command();

        assert!(program == "nano" || program == "notepad");
        assert!(args.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_compose_returns_edited_text() {
        let temp = tempfile::TempDir::new().unwrap();
        let scratch = temp.path().join("ENTRY.txt");

        // `true` leaves the seeded text untouched
        let session = EditorSession::new("true".to_string());
        let text = session.compose(&scratch, "seeded text").unwrap();

        assert_eq!(text, "seeded text");
        assert!(!scratch.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_compose_reports_failed_editor() {
        let temp = tempfile::TempDir::new().unwrap();
        let scratch = temp.path().join("ENTRY.txt");

        let session = EditorSession::new("false".to_string());
        assert!(matches!(
            session.compose(&scratch, ""),
            Err(DaybookError::Editor(_))
        ));
        assert!(!scratch.exists());
    }

    #[test]
    fn test_compose_reports_missing_editor() {
        let temp = tempfile::TempDir::new().unwrap();
        let scratch = temp.path().join("ENTRY.txt");

        let session = EditorSession::new("daybook-no-such-editor-xyz".to_string());
        assert!(matches!(
            session.compose(&scratch, ""),
            Err(DaybookError::Editor(_))
        ));
    }
}
