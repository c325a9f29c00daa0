//! Domain layer - Diary entries, search and input validation

pub mod day;
pub mod entry;
pub mod image;
pub mod search;

pub use day::DayReference;
pub use entry::{sort_for_display, DiaryEntry};
pub use search::{search, SearchQuery};
