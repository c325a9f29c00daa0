//! Key-value slot storage

use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// A persistent key-value primitive with atomic single-key writes.
pub trait SlotStore {
    /// Read a slot; `None` if it was never written or has been removed
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the whole slot content
    fn write(&mut self, key: &str, contents: &str) -> Result<()>;

    /// Remove a slot; removing a missing slot is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Slots kept as `<key>.json` files in one directory
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    pub fn new(dir: PathBuf) -> Self {
        FileSlotStore { dir }
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a temp file next to the slot, then rename into place.
    fn write(&mut self, key: &str, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.slot_path(key);
        let tmp_path = self
            .dir
            .join(format!("{}.json.daybook-tmp-{}", key, std::process::id()));

        fs::write(&tmp_path, contents)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process slots
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStore {
    slots: HashMap<String, String>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, contents: &str) -> Result<()> {
        self.slots.insert(key.to_string(), contents.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.slots.remove(key);
        Ok(())
    }
}
