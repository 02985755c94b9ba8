//! Error types for persistence and hydration.

use std::io;

/// A namespace could not be written to (or removed from) the backing store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("could not serialize namespace {namespace}: {source}")]
    Serialize {
        namespace: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a namespace could not be hydrated.
///
/// Never surfaced to the host: the context logs it, keeps it for
/// inspection, and starts over from a fresh state.
#[derive(Debug, thiserror::Error)]
pub enum HydrationError {
    #[error("namespace {namespace} is malformed: {source}")]
    Malformed {
        namespace: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("namespace {namespace} could not be read: {source}")]
    Storage {
        namespace: String,
        #[source]
        source: StorageError,
    },
}

impl HydrationError {
    pub fn namespace(&self) -> &str {
        match self {
            HydrationError::Malformed { namespace, .. } => namespace,
            HydrationError::Storage { namespace, .. } => namespace,
        }
    }
}

/// A collaborator reported an activity kind this build does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown activity kind: {0}")]
pub struct UnknownActivityKind(pub String);

/// A track name that matches no curriculum track.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown track: {0}")]
pub struct UnknownTrack(pub String);
