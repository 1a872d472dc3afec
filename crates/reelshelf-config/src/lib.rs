pub mod config;
pub mod paths;

pub use config::{ApiConfig, Config, ImageConfig, LoggingConfig, StorageConfig, DEFAULT_BASE_URL, DEFAULT_CORS_PROXY, DEFAULT_IMAGE_BASE_URL, DEFAULT_IMAGE_SIZE, DEFAULT_PLACEHOLDER};
pub use paths::{base_path_override, PathManager};
