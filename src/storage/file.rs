//! File-backed store: one pretty-printed JSON file per namespace.

use super::KeyValueStore;
use crate::config::StorageConfig;
use crate::error::StorageError;
use std::fs;
use std::io;
use tracing::debug;

pub struct FileStore {
    config: StorageConfig,
}

impl FileStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Store rooted at the resolved default data directory.
    pub fn open_default() -> io::Result<Self> {
        Ok(Self::new(StorageConfig::resolve()?))
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, namespace: &str) -> Result<Option<String>, StorageError> {
        let path = self.config.namespace_path(namespace);
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes go to a temporary sibling first and are renamed into place,
    /// so a crash mid-write leaves the previous blob intact.
    fn set(&mut self, namespace: &str, blob: &str) -> Result<(), StorageError> {
        let path = self.config.namespace_path(namespace);

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, blob)?;
        fs::rename(&tmp_path, &path)?;

        debug!("Wrote {} bytes to {}", blob.len(), path.display());
        Ok(())
    }

    fn remove(&mut self, namespace: &str) -> Result<(), StorageError> {
        let path = self.config.namespace_path(namespace);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
