use serde::{Deserialize, Serialize};

/// A playable stream link as returned by the video provider endpoints.
///
/// This is the whole contract between the catalog client and the playback
/// selector: the selector never looks inside `url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreamSource {
    pub quality: String,
    pub url: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub format: String,
}

impl StreamSource {
    /// HLS playlists need an external demuxer; everything else is a direct file.
    pub fn is_hls(&self) -> bool {
        self.format.eq_ignore_ascii_case("hls")
            || self.format.eq_ignore_ascii_case("m3u8")
            || self.url.split('?').next().map(|u| u.ends_with(".m3u8")).unwrap_or(false)
    }
}
