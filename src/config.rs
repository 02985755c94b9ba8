//! Storage configuration.

use crate::core::constants::{DATA_DIR_ENV, DEFAULT_DATA_DIR_NAME};
use std::io;
use std::path::PathBuf;

/// Where the file-backed store keeps its namespaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolve the data directory.
    ///
    /// `ACADEMY_DATA_DIR` wins when set and non-empty, otherwise
    /// `~/.contract-academy`.
    pub fn resolve() -> io::Result<Self> {
        Self::resolve_with(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
    }

    fn resolve_with(override_dir: Option<PathBuf>) -> io::Result<Self> {
        if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
            return Ok(Self::new(dir));
        }
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        Ok(Self::new(home_dir.join(DEFAULT_DATA_DIR_NAME)))
    }

    /// Path of the JSON file backing a namespace.
    pub fn namespace_path(&self, namespace: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", namespace))
    }
}
