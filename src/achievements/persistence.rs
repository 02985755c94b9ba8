//! Achievement namespace persistence (counters and ledger as one blob).

use super::ledger::UnlockedSet;
use crate::core::constants::ACHIEVEMENTS_NAMESPACE;
use crate::error::{HydrationError, StorageError};
use crate::progression::ActivityCounters;
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// On-disk shape of the achievements namespace.
///
/// Counters and the unlocked ledger are always written together so a
/// reader never sees an unlock without the counter that triggered it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementSave {
    #[serde(default)]
    pub counters: ActivityCounters,
    #[serde(default)]
    pub unlocked: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub unlocked_at: BTreeMap<String, i64>,
}

impl AchievementSave {
    pub fn from_state(counters: &ActivityCounters, unlocked: &UnlockedSet) -> Self {
        Self {
            counters: *counters,
            unlocked: unlocked.iter().map(String::from).collect(),
            unlocked_at: unlocked.timestamps().clone(),
        }
    }

    pub fn into_state(self) -> (ActivityCounters, UnlockedSet) {
        let unlocked = UnlockedSet::from_parts(self.unlocked, self.unlocked_at);
        (self.counters, unlocked)
    }
}

/// Load the achievements namespace.
///
/// `Ok(None)` means nothing has been stored yet.
pub fn load_achievements<S: KeyValueStore + ?Sized>(
    store: &S,
) -> Result<Option<AchievementSave>, HydrationError> {
    let blob = store
        .get(ACHIEVEMENTS_NAMESPACE)
        .map_err(|source| HydrationError::Storage {
            namespace: ACHIEVEMENTS_NAMESPACE.to_string(),
            source,
        })?;

    let Some(json) = blob else {
        return Ok(None);
    };

    serde_json::from_str(&json)
        .map(Some)
        .map_err(|source| HydrationError::Malformed {
            namespace: ACHIEVEMENTS_NAMESPACE.to_string(),
            source,
        })
}

/// Save the achievements namespace.
pub fn save_achievements<S: KeyValueStore + ?Sized>(
    store: &mut S,
    save: &AchievementSave,
) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(save).map_err(|source| StorageError::Serialize {
        namespace: ACHIEVEMENTS_NAMESPACE.to_string(),
        source,
    })?;
    store.set(ACHIEVEMENTS_NAMESPACE, &json)
}
