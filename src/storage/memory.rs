use super::KeyValueStore;
use crate::error::StorageError;
use std::collections::HashMap;
use std::io;

/// In-memory store, used by tests and by hosts without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
    read_only: bool,
    unreadable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a namespace with a raw blob (which need not be valid JSON).
    pub fn with_blob(mut self, namespace: &str, blob: &str) -> Self {
        self.blobs.insert(namespace.to_string(), blob.to_string());
        self
    }

    /// Make every subsequent write fail, simulating an unavailable device.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Make every subsequent read fail, simulating storage that cannot be
    /// opened at all.
    pub fn set_unreadable(&mut self, unreadable: bool) {
        self.unreadable = unreadable;
    }

    pub fn raw(&self, namespace: &str) -> Option<&str> {
        self.blobs.get(namespace).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, namespace: &str) -> Result<Option<String>, StorageError> {
        if self.unreadable {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is unreadable",
            )));
        }
        Ok(self.blobs.get(namespace).cloned())
    }

    fn set(&mut self, namespace: &str, blob: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.blobs.insert(namespace.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&mut self, namespace: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.blobs.remove(namespace);
        Ok(())
    }
}
