//! Namespaced key-value persistence.
//!
//! Every persisted piece of progression state lives under one namespace
//! string and is stored as a JSON blob. The progression context is the only
//! component that talks to a store, so hydration and corruption handling live
//! in one place.
//!
//! Writes are last-writer-wins. Two processes sharing a store can lose each
//! other's updates; no locking is attempted.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

/// A namespaced blob store.
pub trait KeyValueStore {
    /// Read the blob stored under `namespace`, or `None` if nothing is stored.
    fn get(&self, namespace: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob stored under `namespace`.
    fn set(&mut self, namespace: &str, blob: &str) -> Result<(), StorageError>;

    /// Remove the blob stored under `namespace`. Removing a missing
    /// namespace is not an error.
    fn remove(&mut self, namespace: &str) -> Result<(), StorageError>;
}
