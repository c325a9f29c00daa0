//! Text and calendar-day filtering over diary entries

use crate::domain::day::local_day;
use crate::domain::DiaryEntry;
use chrono::NaiveDate;

/// Search criteria; both parts are optional and combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Case-insensitive substring of the entry content
    pub text: String,
    /// Exact local calendar day of the entry date
    pub on: Option<NaiveDate>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, on: Option<NaiveDate>) -> Self {
        SearchQuery {
            text: text.into(),
            on,
        }
    }

    /// True when neither filter applies
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.on.is_none()
    }

    /// Check a single entry against both predicates
    pub fn matches(&self, entry: &DiaryEntry) -> bool {
        self.matches_text(entry) && self.matches_day(entry)
    }

    fn matches_text(&self, entry: &DiaryEntry) -> bool {
        if self.text.trim().is_empty() {
            return true;
        }
        entry
            .content
            .to_lowercase()
            .contains(&self.text.to_lowercase())
    }

    fn matches_day(&self, entry: &DiaryEntry) -> bool {
        self.on.is_none_or(|day| local_day(&entry.date) == day)
    }
}

/// Entries matching `query`, in collection order.
pub fn search(entries: &[DiaryEntry], query: &SearchQuery) -> Vec<DiaryEntry> {
    if query.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|entry| query.matches(entry))
        .cloned()
        .collect()
}
