//! The unlocked-achievement ledger.

use super::data::get_achievement_def;
use std::collections::{BTreeMap, BTreeSet};

/// Set of achievement ids already granted to the user.
///
/// Ids are only ever added. Ids that are no longer in the catalog are kept
/// but contribute no XP.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnlockedSet {
    ids: BTreeSet<String>,
    /// Unix timestamp of the first unlock, per id.
    unlocked_at: BTreeMap<String, i64>,
}

impl UnlockedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from persisted parts. Duplicate ids collapse, and
    /// timestamps for ids outside the set are dropped.
    pub fn from_parts(
        ids: impl IntoIterator<Item = String>,
        mut unlocked_at: BTreeMap<String, i64>,
    ) -> Self {
        let ids: BTreeSet<String> = ids.into_iter().collect();
        unlocked_at.retain(|id, _| ids.contains(id));
        Self { ids, unlocked_at }
    }

    /// Check if an achievement is unlocked.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Unlock an achievement. Returns true if newly unlocked.
    pub fn unlock(&mut self, id: &str, unlocked_at: i64) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.insert(id.to_string());
        self.unlocked_at.insert(id.to_string(), unlocked_at);
        true
    }

    /// Union `ids` into the set. Existing members and their timestamps are
    /// left untouched. Returns the ids that were actually added.
    pub fn merge<I, S>(&mut self, ids: I, unlocked_at: i64) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .filter(|id| self.unlock(id.as_ref(), unlocked_at))
            .map(|id| id.as_ref().to_string())
            .collect()
    }

    /// XP from every unlocked id, looked up in the current catalog.
    pub fn achievement_xp(&self) -> u64 {
        self.ids
            .iter()
            .filter_map(|id| get_achievement_def(id))
            .fold(0u64, |total, def| total.saturating_add(def.xp))
    }

    pub fn unlocked_at(&self, id: &str) -> Option<i64> {
        self.unlocked_at.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Most recent unlocks first; ids without a timestamp come last.
    pub fn recent(&self, limit: usize) -> Vec<(&str, Option<i64>)> {
        let mut entries: Vec<_> = self.iter().map(|id| (id, self.unlocked_at(id))).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(limit);
        entries
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub(crate) fn timestamps(&self) -> &BTreeMap<String, i64> {
        &self.unlocked_at
    }
}
