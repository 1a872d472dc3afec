use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key/value persistence behind the local stores.
///
/// Reads never fail: a value that cannot be read is reported as absent.
/// Writes replace the whole value.
pub trait KeyValueBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-process backend, used in tests and for throwaway sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }

    fn io_error(key: &str, source: std::io::Error) -> StoreError {
        StoreError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Store miss: {} (file does not exist)", key);
                None
            }
            Err(e) => {
                warn!("Failed to read store file {:?}: {}", path, e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| Self::io_error(key, e))?;

        // Atomic write: temp file, then rename over the old value
        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, value).map_err(|e| Self::io_error(key, e))?;
        std::fs::rename(&temp_path, &path).map_err(|e| Self::io_error(key, e))?;

        debug!("Store saved: {} ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_roundtrip() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.get("watchlist"), None);
        backend.set("watchlist", "[]").unwrap();
        assert_eq!(backend.get("watchlist").as_deref(), Some("[]"));
        backend.remove("watchlist").unwrap();
        assert!(backend.is_empty());
    }

    #[test]
    fn test_file_backend_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("store"));
        backend.set("myList", r#"[{"id":1}]"#).unwrap();

        let reopened = FileBackend::new(dir.path().join("store"));
        assert_eq!(reopened.get("myList").as_deref(), Some(r#"[{"id":1}]"#));
        assert!(dir.path().join("store").join("myList.json").exists());
        assert!(!dir.path().join("store").join("myList.json.tmp").exists());
    }

    #[test]
    fn test_file_backend_missing_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path());
        assert_eq!(backend.get("recentlyViewed"), None);
        // removing an absent key is fine
        backend.remove("recentlyViewed").unwrap();
    }

    #[test]
    fn test_file_backend_sanitizes_keys() {
        let backend = FileBackend::new("/tmp/x");
        assert_eq!(backend.path_for("../etc/passwd"), PathBuf::from("/tmp/x/___etc_passwd.json"));
    }
}
