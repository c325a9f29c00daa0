//! Application layer - Use cases and orchestration

pub mod compose;
pub mod init;
pub mod manage_config;
pub mod manage_entries;
pub mod repository;

pub use compose::{EntryDraft, EntryEdit};
pub use manage_config::ConfigService;
pub use manage_entries::EntryService;
pub use repository::EntryRepository;
