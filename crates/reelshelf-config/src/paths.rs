use anyhow::Result;
use std::path::{Path, PathBuf};

/// Get the base path override from the environment, if set.
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var("REELSHELF_BASE_PATH").ok().map(PathBuf::from)
}

#[derive(Debug, Clone)]
pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("reelshelf");

        Ok(Self::from_base(base_dir))
    }

    /// Lay everything out under a single directory (used for the env override and in tests).
    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Directory holding one JSON file per persisted key (lists, settings).
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("store")
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("reelshelf.log")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        std::fs::create_dir_all(self.store_dir())?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = base_path_override() {
            return Self::from_base(base);
        }

        // Platform config dir (e.g. ~/.config/reelshelf on Linux), falling back to the cwd
        Self::new().unwrap_or_else(|_| Self::from_base(PathBuf::from(".reelshelf")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_under_base() {
        let paths = PathManager::from_base("/tmp/rs");
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/rs/config.toml"));
        assert_eq!(paths.store_dir(), PathBuf::from("/tmp/rs/data/store"));
        assert_eq!(paths.log_file(), PathBuf::from("/tmp/rs/logs/reelshelf.log"));
    }

    #[test]
    fn test_ensure_directories_creates_store() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PathManager::from_base(dir.path());
        paths.ensure_directories().unwrap();
        assert!(paths.store_dir().is_dir());
        assert!(paths.log_dir().is_dir());
    }
}
