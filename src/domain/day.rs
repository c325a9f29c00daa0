//! Calendar day parsing and local-day conversion

use crate::error::{DaybookError, Result};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// A day named on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayReference {
    Today,
    Yesterday,
    Tomorrow,
    Specific(NaiveDate),
}

impl DayReference {
    /// Parse `today`, `yesterday`, `tomorrow`, `YYYY-MM-DD` or `DD-MM-YYYY`
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DayReference::Today),
            "yesterday" => Ok(DayReference::Yesterday),
            "tomorrow" => Ok(DayReference::Tomorrow),
            _ => NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .or_else(|_| NaiveDate::parse_from_str(&normalized, "%d-%m-%Y"))
                .map(DayReference::Specific)
                .map_err(|_| DaybookError::InvalidDate(input.to_string())),
        }
    }

    /// Resolve to a calendar day relative to `today`
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DayReference::Today => today,
            DayReference::Yesterday => today - Duration::days(1),
            DayReference::Tomorrow => today + Duration::days(1),
            DayReference::Specific(date) => *date,
        }
    }
}

/// Calendar day of a timestamp in the local time zone.
pub fn local_day(date: &DateTime<Utc>) -> NaiveDate {
    date.with_timezone(&Local).date_naive()
}

/// Timestamp for a diary entry written about `day`.
///
/// The current day keeps the current time; any other day maps to local
/// midnight, which is what picking a day from a calendar gives.
pub fn entry_timestamp(day: NaiveDate, now: DateTime<Local>) -> DateTime<Utc> {
    if day == now.date_naive() {
        return now.with_timezone(&Utc);
    }

    let midnight = day.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        // Midnight can fall in a DST gap; the day is what matters.
        .unwrap_or_else(|| Local.from_utc_datetime(&midnight))
        .with_timezone(&Utc)
}
