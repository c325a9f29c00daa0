//! In-memory entry collection kept in step with its persisted slot
//!
//! One `EntryRepository` lives for one session: it is opened from an
//! [`EntryStorage`], handed to whatever needs the entries, and dropped at the
//! end. Every mutation is saved before it becomes visible in memory, so a
//! failed save leaves both copies as they were.

use crate::domain::{search, sort_for_display, DiaryEntry, SearchQuery};
use crate::error::{DaybookError, Result};
use crate::infrastructure::persistence;
use crate::infrastructure::{EntryStorage, SlotStore};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
struct ActiveSearch {
    query: SearchQuery,
    results: Vec<DiaryEntry>,
}

/// Canonical entry list plus the current filtered view
#[derive(Debug)]
pub struct EntryRepository<S: SlotStore> {
    storage: EntryStorage<S>,
    entries: Vec<DiaryEntry>,
    search: Option<ActiveSearch>,
}

impl<S: SlotStore> EntryRepository<S> {
    /// Start a session from whatever the storage slot holds
    pub fn open(storage: EntryStorage<S>) -> Self {
        let entries = storage.load();
        debug!("Opened diary with {} entries", entries.len());
        EntryRepository {
            storage,
            entries,
            search: None,
        }
    }

    pub fn storage(&self) -> &EntryStorage<S> {
        &self.storage
    }

    /// All entries, in collection order (newest created first)
    pub fn list(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&DiaryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Prepend a new entry. The filtered view of an active search is kept
    /// as it was.
    pub fn create(&mut self, entry: DiaryEntry) -> Result<()> {
        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.push(entry);
        next.extend(self.entries.iter().cloned());
        self.commit(next)
    }

    /// Replace the entry with the same id as a whole
    pub fn update(&mut self, entry: DiaryEntry) -> Result<()> {
        let Some(pos) = self.position(&entry.id) else {
            return Err(DaybookError::EntryNotFound(entry.id));
        };

        let mut next = self.entries.clone();
        next[pos] = entry.clone();
        self.commit(next)?;

        if let Some(active) = self.search.as_mut() {
            if let Some(slot) = active.results.iter_mut().find(|e| e.id == entry.id) {
                *slot = entry;
            }
        }
        Ok(())
    }

    /// Remove an entry and return it
    pub fn delete(&mut self, id: &str) -> Result<DiaryEntry> {
        let Some(pos) = self.position(id) else {
            return Err(DaybookError::EntryNotFound(id.to_string()));
        };

        let mut next = self.entries.clone();
        let removed = next.remove(pos);
        self.commit(next)?;

        if let Some(active) = self.search.as_mut() {
            active.results.retain(|e| e.id != id);
        }
        Ok(removed)
    }

    /// Drop every entry and the persisted slot
    pub fn clear(&mut self) -> Result<()> {
        self.storage.clear_all()?;
        self.entries.clear();
        self.search = None;
        Ok(())
    }

    /// Filter the full collection and make the result the current view
    pub fn search(&mut self, query: SearchQuery) -> &[DiaryEntry] {
        let results = search(&self.entries, &query);
        let active = self.search.insert(ActiveSearch { query, results });
        &active.results
    }

    /// Go back to showing the whole collection
    pub fn clear_search(&mut self) {
        self.search = None;
    }

    pub fn is_search_active(&self) -> bool {
        self.search.is_some()
    }

    pub fn active_query(&self) -> Option<&SearchQuery> {
        self.search.as_ref().map(|s| &s.query)
    }

    /// The current view in display order (newest first)
    pub fn visible(&self) -> Vec<DiaryEntry> {
        let mut view = match &self.search {
            Some(active) => active.results.clone(),
            None => self.entries.clone(),
        };
        sort_for_display(&mut view);
        view
    }

    /// Export the whole collection, ignoring any search; `None` when empty
    pub fn export_to(&self, dir: &Path, today: NaiveDate) -> Result<Option<PathBuf>> {
        persistence::export_to(&self.entries, dir, today)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn commit(&mut self, next: Vec<DiaryEntry>) -> Result<()> {
        self.storage.save(&next)?;
        self.entries = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{MemorySlotStore, DEFAULT_STORAGE_KEY};
    use chrono::{Local, NaiveDate, TimeZone, Utc};
    use tempfile::TempDir;

    /// Store whose writes can be made to fail
    #[derive(Debug, Default)]
    struct FlakyStore {
        inner: MemorySlotStore,
        fail_writes: bool,
    }

    impl SlotStore for FlakyStore {
        fn read(&self, key: &str) -> Result<Option<String>> {
            self.inner.read(key)
        }

        fn write(&mut self, key: &str, contents: &str) -> Result<()> {
            if self.fail_writes {
                return Err(DaybookError::Io(std::io::Error::other("disk full")));
            }
            self.inner.write(key, contents)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.inner.remove(key)
        }
    }

    fn entry(id: &str, y: i32, m: u32, d: u32, content: &str) -> DiaryEntry {
        let date = Local
            .with_ymd_and_hms(y, m, d, 10, 0, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        DiaryEntry::with_id(id, date, content, "https://example.com/p.jpg")
    }

    fn repo() -> EntryRepository<MemorySlotStore> {
        EntryRepository::open(EntryStorage::with_default_key(MemorySlotStore::new()))
    }

    fn ids(entries: &[DiaryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    fn persisted(repo: &EntryRepository<MemorySlotStore>) -> Vec<DiaryEntry> {
        repo.storage().load()
    }

    #[test]
    fn test_open_loads_existing_slot() {
        let mut storage = EntryStorage::with_default_key(MemorySlotStore::new());
        storage.save(&[entry("a", 2024, 1, 1, "x")]).unwrap();

        let repo = EntryRepository::open(storage);
        assert_eq!(ids(repo.list()), vec!["a"]);
    }

    #[test]
    fn test_create_prepends_and_persists() {
        let mut repo = repo();
        repo.create(entry("a", 2024, 1, 1, "first")).unwrap();
        repo.create(entry("b", 2023, 1, 1, "second")).unwrap();

        assert_eq!(repo.len(), 2);
        assert_eq!(ids(repo.list()), vec!["b", "a"]);
        assert_eq!(persisted(&repo), repo.list());
    }

    #[test]
    fn test_update_replaces_whole_record() {
        let mut repo = repo();
        repo.create(entry("a", 2024, 1, 1, "old")).unwrap();

        let replacement = entry("a", 2024, 2, 2, "new");
        repo.update(replacement.clone()).unwrap();

        assert_eq!(repo.get("a"), Some(&replacement));
        assert_eq!(repo.len(), 1);
        assert_eq!(persisted(&repo), vec![replacement]);
    }

    #[test]
    fn test_update_missing_id_reports_not_found() {
        let mut repo = repo();
        repo.create(entry("a", 2024, 1, 1, "x")).unwrap();

        let err = repo.update(entry("zzz", 2024, 1, 1, "y")).unwrap_err();
        assert!(matches!(err, DaybookError::EntryNotFound(id) if id == "zzz"));
        assert_eq!(ids(repo.list()), vec!["a"]);
        assert_eq!(persisted(&repo), repo.list());
    }

    #[test]
    fn test_delete_existing() {
        let mut repo = repo();
        repo.create(entry("a", 2024, 1, 1, "x")).unwrap();
        repo.create(entry("b", 2024, 1, 2, "y")).unwrap();

        let removed = repo.delete("a").unwrap();

        assert_eq!(removed.id, "a");
        assert_eq!(repo.len(), 1);
        assert!(repo.get("a").is_none());
        assert_eq!(ids(&persisted(&repo)), vec!["b"]);
    }

    #[test]
    fn test_delete_missing_leaves_size() {
        let mut repo = repo();
        repo.create(entry("a", 2024, 1, 1, "x")).unwrap();

        assert!(matches!(
            repo.delete("nope"),
            Err(DaybookError::EntryNotFound(_))
        ));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_clear_removes_slot() {
        let mut repo = repo();
        repo.create(entry("a", 2024, 1, 1, "x")).unwrap();
        repo.search(SearchQuery::new("x", None));

        repo.clear().unwrap();

        assert!(repo.is_empty());
        assert!(!repo.is_search_active());
        assert!(!repo.storage().store().contains(DEFAULT_STORAGE_KEY));
        assert!(repo.visible().is_empty());
    }

    #[test]
    fn test_visible_sorted_newest_first() {
        let mut repo = repo();
        repo.create(entry("jan", 2024, 1, 1, "x")).unwrap();
        repo.create(entry("mar", 2024, 3, 5, "x")).unwrap();
        repo.create(entry("feb", 2024, 2, 10, "x")).unwrap();

        assert_eq!(ids(&repo.visible()), vec!["mar", "feb", "jan"]);
    }

    #[test]
    fn test_search_sets_view() {
        let mut repo = repo();
        repo.create(entry("a", 2024, 3, 5, "Great Day")).unwrap();
        repo.create(entry("b", 2024, 3, 6, "ordinary")).unwrap();

        let found = repo.search(SearchQuery::new("great", None));
        assert_eq!(ids(found), vec!["a"]);
        assert!(repo.is_search_active());
        assert_eq!(ids(&repo.visible()), vec!["a"]);

        repo.clear_search();
        assert!(!repo.is_search_active());
        assert_eq!(repo.visible().len(), 2);
    }

    #[test]
    fn test_search_by_day() {
        let mut repo = repo();
        repo.create(entry("a", 2024, 3, 5, "x")).unwrap();
        repo.create(entry("b", 2024, 3, 6, "x")).unwrap();

        let day = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        assert_eq!(ids(repo.search(SearchQuery::new("", Some(day)))), vec!["b"]);
        assert_eq!(repo.active_query().unwrap().on, Some(day));
    }

    #[test]
    fn test_create_during_search_keeps_view() {
        let mut repo = repo();
        repo.create(entry("a", 2024, 3, 5, "Great Day")).unwrap();
        repo.search(SearchQuery::new("great", None));

        repo.create(entry("b", 2024, 3, 6, "great again")).unwrap();

        assert_eq!(ids(&repo.visible()), vec!["a"]);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_update_and_delete_during_search_follow_view() {
        let mut repo = repo();
        repo.create(entry("a", 2024, 3, 5, "Great Day")).unwrap();
        repo.create(entry("b", 2024, 3, 6, "great again")).unwrap();
        repo.search(SearchQuery::new("great", None));

        let edited = entry("a", 2024, 3, 5, "Edited");
        repo.update(edited.clone()).unwrap();
        assert!(repo.visible().contains(&edited));

        repo.delete("b").unwrap();
        assert_eq!(ids(&repo.visible()), vec!["a"]);
    }

    #[test]
    fn test_failed_save_leaves_state_untouched() {
        let mut repo =
            EntryRepository::open(EntryStorage::with_default_key(FlakyStore::default()));
        repo.create(entry("a", 2024, 1, 1, "x")).unwrap();

        repo.storage.store_mut().fail_writes = true;

        assert!(repo.create(entry("b", 2024, 1, 2, "y")).is_err());
        assert!(repo.update(entry("a", 2024, 1, 1, "changed")).is_err());
        assert!(repo.delete("a").is_err());

        assert_eq!(repo.list(), &[entry("a", 2024, 1, 1, "x")]);
        assert_eq!(repo.storage().load(), repo.list());
    }

    #[test]
    fn test_export_empty_is_noop() {
        let temp = TempDir::new().unwrap();
        let repo = repo();
        let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        assert_eq!(repo.export_to(temp.path(), today).unwrap(), None);
    }

    #[test]
    fn test_export_writes_file() {
        let temp = TempDir::new().unwrap();
        let mut repo = repo();
        repo.create(entry("a", 2024, 3, 5, "x")).unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let path = repo.export_to(temp.path(), today).unwrap().unwrap();
        assert!(path.ends_with("diary-entries-2024-03-06.json"));
    }

    #[test]
    fn test_export_uses_in_memory_collection() {
        let temp = TempDir::new().unwrap();
        let mut repo = repo();
        repo.create(entry("a", 2024, 3, 5, "Great Day")).unwrap();
        repo.create(entry("b", 2024, 3, 6, "ordinary")).unwrap();
        repo.search(SearchQuery::new("great", None));

        // The slot is not read again on export
        repo.storage
            .store_mut()
            .write(DEFAULT_STORAGE_KEY, "not json")
            .unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let path = repo.export_to(temp.path(), today).unwrap().unwrap();
        let exported: Vec<DiaryEntry> =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(exported, repo.list());
        assert_eq!(exported.len(), 2);
    }
}
