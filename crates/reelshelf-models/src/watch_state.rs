use serde::{Deserialize, Serialize};
use crate::media::{MediaItem, MediaKey, MediaKind};

/// The small projection of a catalog item kept in a local list.
///
/// Entries are independent of the live catalog: once saved they are never
/// refreshed from upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchStateEntry {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub title: String,
    pub poster_path: Option<String>,
    /// Release date (movies) or first air date (shows), kept as the raw string.
    #[serde(default, alias = "release_date", alias = "first_air_date")]
    pub date: Option<String>,
}

impl WatchStateEntry {
    pub fn key(&self) -> MediaKey {
        MediaKey::new(self.kind, self.id)
    }

    pub fn from_item(item: &MediaItem) -> Self {
        Self {
            id: item.id(),
            kind: item.kind(),
            title: item.title().to_string(),
            poster_path: item.poster_path().map(str::to_string),
            date: item.date().map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.date
            .as_deref()
            .and_then(crate::date::parse_date)
            .and_then(|d| crate::date::year_of(Some(d)))
    }
}

impl From<&MediaItem> for WatchStateEntry {
    fn from(item: &MediaItem) -> Self {
        Self::from_item(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_legacy_my_list_shape() {
        let raw = r#"{"id":1399,"type":"tv","title":"Game of Thrones","poster_path":"/got.jpg","first_air_date":"2011-04-17"}"#;
        let entry: WatchStateEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.key(), MediaKey::tv(1399));
        assert_eq!(entry.date.as_deref(), Some("2011-04-17"));
        assert_eq!(entry.year(), Some(2011));
    }

    #[test]
    fn test_missing_date_is_none() {
        let raw = r#"{"id":5,"type":"movie","title":"X","poster_path":null}"#;
        let entry: WatchStateEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.date, None);
        assert_eq!(entry.year(), None);
    }
}
