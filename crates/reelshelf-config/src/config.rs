use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub images: ImageConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where catalog requests go and how they are decorated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_cors_proxy")]
    pub cors_proxy: String,
    /// Prefix catalog requests with `cors_proxy` (the browser front end needs it; a CLI usually doesn't)
    #[serde(default = "default_true")]
    pub use_proxy: bool,
    #[serde(default = "default_language")]
    pub language: String,
    /// `service` parameter of the video provider requests
    #[serde(default = "default_streaming_service")]
    pub streaming_service: String,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageConfig {
    #[serde(default = "default_image_base_url")]
    pub base_url: String,
    #[serde(default = "default_image_size")]
    pub default_size: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StorageConfig {
    /// Override for the directory holding the persisted lists and settings
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

pub const DEFAULT_BASE_URL: &str = "https://rivestream.live/api/backendfetch";
pub const DEFAULT_CORS_PROXY: &str = "https://cors-proxy.rdpsell01.workers.dev/";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";
pub const DEFAULT_IMAGE_SIZE: &str = "w500";
pub const DEFAULT_PLACEHOLDER: &str = "/placeholder.svg";

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_cors_proxy() -> String {
    DEFAULT_CORS_PROXY.to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_streaming_service() -> String {
    "asiacloud".to_string()
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

fn default_image_size() -> String {
    DEFAULT_IMAGE_SIZE.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cors_proxy: default_cors_proxy(),
            use_proxy: default_true(),
            language: default_language(),
            streaming_service: default_streaming_service(),
            timeout_seconds: None,
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: default_image_base_url(),
            default_size: default_image_size(),
            placeholder: default_placeholder(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn is_http_url(raw: &str) -> bool {
    url::Url::parse(raw)
        .map(|u| u.scheme() == "http" || u.scheme() == "https")
        .unwrap_or(false)
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("api.base_url cannot be empty"));
        }
        if !is_http_url(&self.api.base_url) {
            return Err(anyhow::anyhow!("api.base_url is not an http(s) URL: {}", self.api.base_url));
        }
        if self.api.use_proxy && !is_http_url(&self.api.cors_proxy) {
            return Err(anyhow::anyhow!("api.cors_proxy is not an http(s) URL: {}", self.api.cors_proxy));
        }
        if self.api.language.trim().is_empty() {
            return Err(anyhow::anyhow!("api.language cannot be empty"));
        }
        if self.images.default_size.trim().is_empty() {
            return Err(anyhow::anyhow!("images.default_size cannot be empty"));
        }
        Ok(())
    }

    /// Store directory: the configured override, else the path manager's default.
    pub fn store_dir(&self, paths: &crate::PathManager) -> PathBuf {
        self.storage.dir.clone().unwrap_or_else(|| paths.store_dir())
    }
}
