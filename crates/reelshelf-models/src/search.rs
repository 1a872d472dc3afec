use serde::{Deserialize, Serialize};
use crate::media::{MediaKey, MediaKind};

/// A normalized hit from the multi search request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub id: u64,
    pub kind: MediaKind,
    pub title: String,
    pub year: Option<i32>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

impl SearchResult {
    pub fn key(&self) -> MediaKey {
        MediaKey::new(self.kind, self.id)
    }

    /// Route of the detail view for this hit, e.g. `/movie/550`.
    pub fn api_path(&self) -> String {
        format!("/{}/{}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_path_uses_kind() {
        let hit = SearchResult {
            id: 1399,
            kind: MediaKind::Tv,
            title: "Game of Thrones".to_string(),
            year: Some(2011),
            poster_path: None,
            backdrop_path: None,
        };
        assert_eq!(hit.api_path(), "/tv/1399");
        assert_eq!(hit.key(), MediaKey::tv(1399));
    }
}
