//! Entry use cases

use crate::application::compose::{EntryDraft, EntryEdit};
use crate::application::repository::EntryRepository;
use crate::domain::{DiaryEntry, SearchQuery};
use crate::error::{DaybookError, Result};
use crate::infrastructure::SlotStore;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

/// Service for reading and changing diary entries
pub struct EntryService<S: SlotStore> {
    repository: EntryRepository<S>,
}

impl<S: SlotStore> EntryService<S> {
    /// Create a service around an open repository
    pub fn new(repository: EntryRepository<S>) -> Self {
        EntryService { repository }
    }

    pub fn repository(&self) -> &EntryRepository<S> {
        &self.repository
    }

    /// Validate a draft and store it as a new entry
    pub fn add(&mut self, draft: EntryDraft) -> Result<DiaryEntry> {
        let entry = draft.into_entry()?;
        self.repository.create(entry.clone())?;
        info!("Created entry {}", entry.id);
        Ok(entry)
    }

    /// Apply an edit to an existing entry
    pub fn edit(&mut self, id: &str, edit: EntryEdit) -> Result<DiaryEntry> {
        let current = self.show(id)?;
        let updated = edit.apply(&current)?;
        self.repository.update(updated.clone())?;
        info!("Updated entry {}", id);
        Ok(updated)
    }

    pub fn show(&self, id: &str) -> Result<DiaryEntry> {
        self.repository
            .get(id)
            .cloned()
            .ok_or_else(|| DaybookError::EntryNotFound(id.to_string()))
    }

    pub fn remove(&mut self, id: &str) -> Result<DiaryEntry> {
        let removed = self.repository.delete(id)?;
        info!("Deleted entry {}", id);
        Ok(removed)
    }

    /// Entries newest first, optionally limited
    pub fn list(&self, limit: Option<usize>) -> Vec<DiaryEntry> {
        let mut entries = self.repository.visible();
        if let Some(n) = limit {
            entries.truncate(n);
        }
        entries
    }

    /// Matching entries newest first
    pub fn search(&mut self, query: SearchQuery) -> Vec<DiaryEntry> {
        self.repository.search(query);
        self.repository.visible()
    }

    /// Write the export file; `None` when there is nothing to export
    pub fn export(&self, dir: &Path, today: NaiveDate) -> Result<Option<PathBuf>> {
        self.repository.export_to(dir, today)
    }

    /// Remove every entry, returning how many there were
    pub fn clear(&mut self) -> Result<usize> {
        let count = self.repository.len();
        self.repository.clear()?;
        info!("Cleared {} entries", count);
        Ok(count)
    }
}
