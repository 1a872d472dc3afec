//! Lenient date handling for catalog payloads.
//!
//! Upstream sends `""` for unknown release dates and occasionally a full
//! timestamp instead of a plain date. Both decode without failing the item.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Parse a catalog date string, returning `None` for blanks and garbage.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // "2024-05-01T00:00:00Z" -> "2024-05-01"
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Serde adapter for `Option<NaiveDate>` fields that may hold blank strings.
pub fn lenient<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

pub fn year_of(date: Option<NaiveDate>) -> Option<i32> {
    date.map(|d| d.year())
}
