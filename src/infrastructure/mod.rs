//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod persistence;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use editor::EditorSession;
pub use persistence::{EntryStorage, DEFAULT_STORAGE_KEY};
pub use store::{FileSlotStore, MemorySlotStore, SlotStore};
pub use workspace::Workspace;
