//! Module completion, one independent namespace per curriculum track.

use crate::core::constants::MODULES_NAMESPACE_PREFIX;
use crate::error::{HydrationError, StorageError, UnknownTrack};
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Curriculum tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Track {
    Builder,
    Explorer,
    Founder,
    Hacker,
}

impl Track {
    pub const ALL: [Track; 4] = [Track::Builder, Track::Explorer, Track::Founder, Track::Hacker];

    pub fn slug(&self) -> &'static str {
        match self {
            Track::Builder => "builder",
            Track::Explorer => "explorer",
            Track::Founder => "founder",
            Track::Hacker => "hacker",
        }
    }

    /// Display name for the track.
    pub fn name(&self) -> &'static str {
        match self {
            Track::Builder => "Builder",
            Track::Explorer => "Explorer",
            Track::Founder => "Founder",
            Track::Hacker => "Hacker",
        }
    }

    /// Storage namespace holding this track's completion map.
    pub fn namespace(&self) -> String {
        format!("{}{}", MODULES_NAMESPACE_PREFIX, self.slug())
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Track {
    type Err = UnknownTrack;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Track::ALL
            .into_iter()
            .find(|t| t.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTrack(s.to_string()))
    }
}

/// Completion map for one track: module slug to completed flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackProgress {
    modules: BTreeMap<String, bool>,
}

impl TrackProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a module complete. Returns true if it was not complete before.
    pub fn mark_complete(&mut self, slug: &str) -> bool {
        let was_complete = self.is_complete(slug);
        self.modules.insert(slug.to_string(), true);
        !was_complete
    }

    pub fn is_complete(&self, slug: &str) -> bool {
        self.modules.get(slug).copied().unwrap_or(false)
    }

    pub fn completed_count(&self) -> usize {
        self.modules.values().filter(|done| **done).count()
    }

    pub fn completed(&self) -> impl Iterator<Item = &str> {
        self.modules
            .iter()
            .filter(|(_, done)| **done)
            .map(|(slug, _)| slug.as_str())
    }
}

/// Load one track's completion map. `Ok(None)` when nothing is stored.
pub fn load_track<S: KeyValueStore + ?Sized>(
    store: &S,
    track: Track,
) -> Result<Option<TrackProgress>, HydrationError> {
    let namespace = track.namespace();
    let blob = match store.get(&namespace) {
        Ok(blob) => blob,
        Err(source) => return Err(HydrationError::Storage { namespace, source }),
    };
    match blob {
        None => Ok(None),
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| HydrationError::Malformed { namespace, source }),
    }
}

/// Save one track's completion map.
pub fn save_track<S: KeyValueStore + ?Sized>(
    store: &mut S,
    track: Track,
    progress: &TrackProgress,
) -> Result<(), StorageError> {
    let namespace = track.namespace();
    let json = serde_json::to_string_pretty(progress)
        .map_err(|source| StorageError::Serialize {
            namespace: namespace.clone(),
            source,
        })?;
    store.set(&namespace, &json)
}
