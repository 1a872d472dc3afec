use serde::{Deserialize, Serialize};

/// Trailer/teaser entry from the `movieVideos` / `tvVideos` requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Video {
    pub fn is_trailer(&self) -> bool {
        self.kind.eq_ignore_ascii_case("trailer")
    }

    pub fn watch_url(&self) -> Option<String> {
        if self.site.eq_ignore_ascii_case("youtube") {
            Some(format!("https://www.youtube.com/watch?v={}", self.key))
        } else {
            None
        }
    }
}

/// Backdrop image from the `movieImages` / `tvImages` requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageAsset {
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}
