//! Diary workspace on the file system
//!
//! A workspace is any directory holding a `.daybook/` directory with
//! `config.toml` and the `slots/` used by [`FileSlotStore`].

use crate::error::{DaybookError, Result};
use crate::infrastructure::{Config, EntryStorage, FileSlotStore};
use std::fs;
use std::path::{Path, PathBuf};

/// File system location of one diary
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    /// Create a workspace handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Find the workspace: `DAYBOOK_ROOT` first, then walk up from the
    /// current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DAYBOOK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_daybook_dir(&path) {
                return Ok(Workspace::new(path));
            }
            return Err(DaybookError::Config(format!(
                "DAYBOOK_ROOT is set to '{}' but no .daybook directory found. \
                Run 'daybook init' in that directory or unset DAYBOOK_ROOT.",
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing `.daybook` is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_daybook_dir(dir))
            .map(|dir| Workspace::new(dir.to_path_buf()))
            .ok_or_else(|| DaybookError::NotDaybookDirectory(start.to_path_buf()))
    }

    fn has_daybook_dir(path: &Path) -> bool {
        path.join(".daybook").is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn daybook_dir(&self) -> PathBuf {
        self.root.join(".daybook")
    }

    pub fn slots_dir(&self) -> PathBuf {
        self.daybook_dir().join("slots")
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_daybook_dir(&self.root)
    }

    /// Create the `.daybook` directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let daybook_dir = self.daybook_dir();

        if daybook_dir.exists() {
            return Err(DaybookError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&daybook_dir)?;
        fs::create_dir(self.slots_dir())?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Entry storage for this workspace, bound to the configured slot
    pub fn entry_storage(&self) -> Result<EntryStorage<FileSlotStore>> {
        let config = self.load_config()?;
        Ok(EntryStorage::new(
            FileSlotStore::new(self.slots_dir()),
            config.storage_key,
        ))
    }
}
