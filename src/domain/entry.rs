//! Diary entry model

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One diary record.
///
/// Entries are replaced as a whole at the repository boundary; the `id`
/// never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: String,
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
    pub content: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl DiaryEntry {
    /// Create an entry with a freshly generated id
    pub fn new(
        date: DateTime<Utc>,
        content: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), date, content, image_url)
    }

    /// Create an entry with a specific id (for edits and loading)
    pub fn with_id(
        id: impl Into<String>,
        date: DateTime<Utc>,
        content: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        DiaryEntry {
            id: id.into(),
            // Stored dates only carry milliseconds.
            date: date.trunc_subsecs(3),
            content: content.into(),
            image_url: image_url.into(),
        }
    }
}

/// Sort entries for display: newest first, ties keep their current order.
pub fn sort_for_display(entries: &mut [DiaryEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub(crate) mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(date: &DateTime<Utc>) -> String {
        date.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|d| d.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
