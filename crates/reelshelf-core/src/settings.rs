use crate::backend::{KeyValueBackend, StoreError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

pub const SETTINGS_KEY: &str = "settings";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoQuality {
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "480p")]
    P480,
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "1080p")]
    P1080,
}

impl VideoQuality {
    pub const ALL: [VideoQuality; 4] = [VideoQuality::Auto, VideoQuality::P480, VideoQuality::P720, VideoQuality::P1080];

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoQuality::Auto => "auto",
            VideoQuality::P480 => "480p",
            VideoQuality::P720 => "720p",
            VideoQuality::P1080 => "1080p",
        }
    }

    /// Label prefix a stream quality must start with; `None` for auto.
    pub fn label_prefix(&self) -> Option<&'static str> {
        match self {
            VideoQuality::Auto => None,
            other => Some(other.as_str()),
        }
    }
}

impl fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoQuality {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        VideoQuality::ALL
            .into_iter()
            .find(|q| q.as_str() == normalized || q.as_str().trim_end_matches('p') == normalized)
            .ok_or_else(|| SettingsError::InvalidValue {
                key: "video_quality".to_string(),
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("unknown setting `{0}` (expected one of: dark_mode, subtitles, autoplay, video_quality)")]
    UnknownKey(String),

    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}

/// Playback and display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub dark_mode: bool,
    pub subtitles: bool,
    pub autoplay: bool,
    pub video_quality: VideoQuality,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            subtitles: false,
            autoplay: true,
            video_quality: VideoQuality::Auto,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, SettingsError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(SettingsError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

impl UserSettings {
    pub const KEYS: [&'static str; 4] = ["dark_mode", "subtitles", "autoplay", "video_quality"];

    /// Set one field from its textual form (`autoplay=off`, `video_quality=720p`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        match key.trim().replace('-', "_").as_str() {
            "dark_mode" => self.dark_mode = parse_bool("dark_mode", value)?,
            "subtitles" => self.subtitles = parse_bool("subtitles", value)?,
            "autoplay" => self.autoplay = parse_bool("autoplay", value)?,
            "video_quality" | "quality" => self.video_quality = value.parse()?,
            other => return Err(SettingsError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

/// [`UserSettings`] persisted as one JSON value.
#[derive(Debug)]
pub struct SettingsStore<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> SettingsStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Stored settings, or the defaults when nothing usable is stored.
    pub fn load(&self) -> UserSettings {
        let Some(raw) = self.backend.get(SETTINGS_KEY) else {
            return UserSettings::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Stored settings are invalid, using defaults: {}", e);
            UserSettings::default()
        })
    }

    pub fn save(&mut self, settings: &UserSettings) -> Result<(), StoreError> {
        let json = serde_json::to_string(settings).map_err(|source| StoreError::Serialize {
            key: SETTINGS_KEY.to_string(),
            source,
        })?;
        self.backend.set(SETTINGS_KEY, &json)
    }

    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.backend.remove(SETTINGS_KEY)
    }
}
