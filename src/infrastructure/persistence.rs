//! Entry collection persistence
//!
//! The whole collection lives in one slot as a JSON array. Loading is
//! fail-soft: a missing, unreadable or corrupt slot yields an empty diary.

use crate::domain::DiaryEntry;
use crate::error::Result;
use crate::infrastructure::store::SlotStore;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default slot name for the entry collection
pub const DEFAULT_STORAGE_KEY: &str = "diaryEntries";

/// Reads and writes the entry collection in a single named slot
#[derive(Debug)]
pub struct EntryStorage<S: SlotStore> {
    store: S,
    key: String,
}

impl<S: SlotStore> EntryStorage<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        EntryStorage {
            store,
            key: key.into(),
        }
    }

    /// Storage bound to the default slot
    pub fn with_default_key(store: S) -> Self {
        Self::new(store, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Overwrite the slot with the full collection
    pub fn save(&mut self, entries: &[DiaryEntry]) -> Result<()> {
        let serialized = serde_json::to_string(entries)?;
        self.store.write(&self.key, &serialized)?;
        debug!("Saved {} entries to slot '{}'", entries.len(), self.key);
        Ok(())
    }

    /// Read the collection, degrading to empty on any failure
    pub fn load(&self) -> Vec<DiaryEntry> {
        let raw = match self.store.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Error reading diary entries from slot '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Error parsing diary entries from slot '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Remove the slot, as if nothing had ever been saved
    pub fn clear_all(&mut self) -> Result<()> {
        self.store.remove(&self.key)?;
        debug!("Cleared slot '{}'", self.key);
        Ok(())
    }

}

/// Indented JSON of a collection, as written by [`export_to`]
pub fn export_json(entries: &[DiaryEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Write `entries` to `dir/diary-entries-<today>.json`.
///
/// Returns `None` without writing anything when `entries` is empty.
pub fn export_to(
    entries: &[DiaryEntry],
    dir: &Path,
    today: NaiveDate,
) -> Result<Option<PathBuf>> {
    if entries.is_empty() {
        return Ok(None);
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(today));
    fs::write(&path, export_json(entries)?)?;
    debug!("Exported {} entries to {}", entries.len(), path.display());
    Ok(Some(path))
}

/// File name of an export made on `today`
pub fn export_file_name(today: NaiveDate) -> String {
    format!("diary-entries-{}.json", today.format("%Y-%m-%d"))
}
