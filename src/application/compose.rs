//! Entry creation and edit boundary
//!
//! Validation happens here, before the repository sees a record: content
//! must not be blank and an image reference is required.

use crate::domain::DiaryEntry;
use crate::error::{DaybookError, Result};
use chrono::{DateTime, Utc};

/// Input for a new entry
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub date: DateTime<Utc>,
    pub content: String,
    pub image_url: Option<String>,
}

impl EntryDraft {
    /// Validate and assign a fresh id
    pub fn into_entry(self) -> Result<DiaryEntry> {
        let content = validate_content(self.content)?;
        let image_url = validate_image_url(self.image_url)?;
        Ok(DiaryEntry::new(self.date, content, image_url))
    }
}

/// Replacement values for an existing entry; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct EntryEdit {
    pub date: Option<DateTime<Utc>>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

impl EntryEdit {
    /// Build the full replacement record for `current`
    pub fn apply(self, current: &DiaryEntry) -> Result<DiaryEntry> {
        let content = validate_content(self.content.unwrap_or_else(|| current.content.clone()))?;
        let image_url =
            validate_image_url(self.image_url.or_else(|| Some(current.image_url.clone())))?;
        Ok(DiaryEntry::with_id(
            current.id.clone(),
            self.date.unwrap_or(current.date),
            content,
            image_url,
        ))
    }
}

fn validate_content(content: String) -> Result<String> {
    if content.trim().is_empty() {
        return Err(DaybookError::Validation(
            "Please write something about your day".to_string(),
        ));
    }
    Ok(content)
}

fn validate_image_url(image_url: Option<String>) -> Result<String> {
    match image_url {
        Some(url) if !url.trim().is_empty() => Ok(url),
        _ => Err(DaybookError::Validation(
            "Please upload an image".to_string(),
        )),
    }
}
