//! Progression context: owns counters, the unlocked ledger and track
//! completion, and keeps them in sync with the backing store.
//!
//! Every activity event runs to completion (update counter, evaluate,
//! merge, persist) before the next one is handled, so a read straight after
//! a write always sees it. Derived values (XP, level) are recomputed on
//! every read.

use crate::achievements::{
    evaluate, load_achievements, save_achievements, AchievementDef, AchievementSave, UnlockedSet,
};
use crate::core::constants::ACHIEVEMENTS_NAMESPACE;
use crate::error::{HydrationError, StorageError};
use crate::modules::{load_track, save_track, Track, TrackProgress};
use crate::progression::{activity_xp, get_level, ActivityCounters, ActivityKind, LevelInfo};
use crate::storage::KeyValueStore;
use chrono::Utc;
use tracing::{debug, info, warn};

/// Lifecycle of the context.
///
/// Unreadable persisted state does not get a phase of its own: hydration
/// falls back to a fresh state, finishes Ready, and records what went wrong
/// in [`ProgressionContext::hydration_errors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Persisted state not yet read.
    Loading,
    /// State hydrated; derived values are meaningful.
    Ready,
}

pub struct ProgressionContext<S: KeyValueStore> {
    store: S,
    phase: Phase,
    counters: ActivityCounters,
    unlocked: UnlockedSet,
    tracks: [TrackProgress; 4],
    connected: bool,
    hydration_errors: Vec<HydrationError>,
}

impl<S: KeyValueStore> ProgressionContext<S> {
    /// Create a context in the Loading phase. Call [`Self::hydrate`] before
    /// reporting activity.
    pub fn new(store: S) -> Self {
        Self {
            store,
            phase: Phase::Loading,
            counters: ActivityCounters::default(),
            unlocked: UnlockedSet::new(),
            tracks: Default::default(),
            connected: false,
            hydration_errors: Vec::new(),
        }
    }

    /// Create and hydrate in one step.
    pub fn open(store: S) -> Self {
        let mut ctx = Self::new(store);
        ctx.hydrate();
        ctx
    }

    /// Read all namespaces from the store.
    ///
    /// A missing namespace starts empty. An unreadable or malformed one is
    /// logged and replaced by a fresh default; this never fails.
    pub fn hydrate(&mut self) {
        self.phase = Phase::Loading;
        self.hydration_errors.clear();
        self.connected = true;

        match load_achievements(&self.store) {
            Ok(Some(save)) => {
                let (counters, unlocked) = save.into_state();
                debug!(
                    "Hydrated counters {:?} with {} unlocked achievements",
                    counters,
                    unlocked.len()
                );
                self.counters = counters;
                self.unlocked = unlocked;
            }
            Ok(None) => {
                debug!("No saved achievements, starting fresh");
                self.counters = ActivityCounters::default();
                self.unlocked = UnlockedSet::new();
            }
            Err(e) => {
                self.record_hydration_error(e);
                self.counters = ActivityCounters::default();
                self.unlocked = UnlockedSet::new();
            }
        }

        for track in Track::ALL {
            let progress = match load_track(&self.store, track) {
                Ok(progress) => progress.unwrap_or_default(),
                Err(e) => {
                    self.record_hydration_error(e);
                    TrackProgress::new()
                }
            };
            self.tracks[track_index(track)] = progress;
        }

        self.phase = Phase::Ready;

        // Catalog entries added since the last save may already be satisfied.
        let granted = self.evaluate_and_merge();
        if !granted.is_empty() {
            info!(
                "Granted {} achievement(s) on load: {:?}",
                granted.len(),
                granted.iter().map(|d| d.id).collect::<Vec<_>>()
            );
            self.persist_achievements();
        }
    }

    fn record_hydration_error(&mut self, error: HydrationError) {
        warn!("Progress reset for {}: {}", error.namespace(), error);
        if matches!(error, HydrationError::Storage { .. }) {
            self.connected = false;
        }
        self.hydration_errors.push(error);
    }

    // =========================================================================
    // Activity
    // =========================================================================

    /// Record an activity and return the achievements it unlocked.
    ///
    /// Incremental kinds add `amount`; [`ActivityKind::QuizStreak`] treats
    /// `amount` as a streak length and keeps the best one. Ignored unless the
    /// context is Ready.
    pub fn record_activity(
        &mut self,
        kind: ActivityKind,
        amount: u64,
    ) -> Vec<&'static AchievementDef> {
        if !self.is_loaded() {
            warn!("Ignoring {} activity before progress is loaded", kind);
            return Vec::new();
        }

        let changed = self.counters.record(kind, amount);
        let granted = self.evaluate_and_merge();

        for def in &granted {
            info!("Achievement unlocked: {} (+{} XP)", def.name, def.xp);
        }

        if changed || !granted.is_empty() {
            debug!("Recorded {} x{} -> {:?}", kind, amount, self.counters);
            self.persist_achievements();
        }
        granted
    }

    /// Record an activity reported by name. Unknown kinds are a no-op.
    pub fn record_activity_named(
        &mut self,
        kind: &str,
        amount: u64,
    ) -> Vec<&'static AchievementDef> {
        match kind.parse::<ActivityKind>() {
            Ok(kind) => self.record_activity(kind, amount),
            Err(e) => {
                warn!("Ignoring activity: {}", e);
                Vec::new()
            }
        }
    }

    /// Mark a module complete in one track. Returns true if newly completed.
    ///
    /// Touches only that track's namespace and grants no XP by itself.
    pub fn mark_module_complete(&mut self, track: Track, slug: &str) -> bool {
        if !self.is_loaded() {
            warn!("Ignoring completion of {}/{} before progress is loaded", track, slug);
            return false;
        }

        if !self.tracks[track_index(track)].mark_complete(slug) {
            return false;
        }

        debug!("Module {}/{} complete", track, slug);
        let result = save_track(&mut self.store, track, &self.tracks[track_index(track)]);
        self.note_write(result, &track.namespace());
        true
    }

    fn evaluate_and_merge(&mut self) -> Vec<&'static AchievementDef> {
        let satisfied = evaluate(&self.counters, &self.unlocked);
        if !satisfied.is_empty() {
            let now = Utc::now().timestamp();
            self.unlocked.merge(satisfied.iter().map(|d| d.id), now);
        }
        satisfied
    }

    fn persist_achievements(&mut self) {
        let save = AchievementSave::from_state(&self.counters, &self.unlocked);
        let result = save_achievements(&mut self.store, &save);
        self.note_write(result, ACHIEVEMENTS_NAMESPACE);
    }

    fn note_write(&mut self, result: Result<(), StorageError>, namespace: &str) {
        match result {
            Ok(()) => self.connected = true,
            Err(e) => {
                warn!("Failed to persist {}: {}", namespace, e);
                self.connected = false;
            }
        }
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write every namespace to the store.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let save = AchievementSave::from_state(&self.counters, &self.unlocked);
        let result = save_achievements(&mut self.store, &save).and_then(|()| {
            Track::ALL.into_iter().try_for_each(|track| {
                save_track(&mut self.store, track, &self.tracks[track_index(track)])
            })
        });
        self.connected = result.is_ok();
        result
    }

    /// Clear all persisted progress and start over.
    ///
    /// If a namespace cannot be removed the in-memory state is left as it
    /// was and the context is marked disconnected.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        let removed = self.store.remove(ACHIEVEMENTS_NAMESPACE).and_then(|()| {
            Track::ALL
                .into_iter()
                .try_for_each(|track| self.store.remove(&track.namespace()))
        });
        if let Err(e) = removed {
            warn!("Failed to reset progress: {}", e);
            self.connected = false;
            return Err(e);
        }

        self.counters = ActivityCounters::default();
        self.unlocked = UnlockedSet::new();
        self.tracks = Default::default();
        self.hydration_errors.clear();
        self.phase = Phase::Ready;
        self.connected = true;
        info!("Progress reset");
        Ok(())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once hydration has finished.
    pub fn is_loaded(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// True while the store accepts reads and writes.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Errors hit during the last hydration, each of which reset a namespace
    /// to its default. Empty after a clean hydration or a reset.
    pub fn hydration_errors(&self) -> &[HydrationError] {
        &self.hydration_errors
    }

    pub fn counters(&self) -> &ActivityCounters {
        &self.counters
    }

    pub fn unlocked(&self) -> &UnlockedSet {
        &self.unlocked
    }

    pub fn track(&self, track: Track) -> &TrackProgress {
        &self.tracks[track_index(track)]
    }

    pub fn activity_xp(&self) -> u64 {
        activity_xp(&self.counters)
    }

    pub fn achievement_xp(&self) -> u64 {
        self.unlocked.achievement_xp()
    }

    pub fn total_xp(&self) -> u64 {
        self.activity_xp().saturating_add(self.achievement_xp())
    }

    pub fn level(&self) -> LevelInfo {
        get_level(self.total_xp())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn track_index(track: Track) -> usize {
    match track {
        Track::Builder => 0,
        Track::Explorer => 1,
        Track::Founder => 2,
        Track::Hacker => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn ready() -> ProgressionContext<MemoryStore> {
        ProgressionContext::open(MemoryStore::new())
    }

    #[test]
    fn test_new_context_is_loading() {
        let ctx = ProgressionContext::new(MemoryStore::new());
        assert_eq!(ctx.phase(), Phase::Loading);
        assert!(!ctx.is_loaded());
    }

    #[test]
    fn test_fresh_user() {
        let ctx = ready();
        assert!(ctx.is_loaded());
        assert!(ctx.is_connected());
        assert_eq!(ctx.total_xp(), 0);

        let level = ctx.level();
        assert_eq!(level.level, 1);
        assert_eq!(level.progress, 0.0);
    }

    #[test]
    fn test_activity_before_load_is_ignored() {
        let mut ctx = ProgressionContext::new(MemoryStore::new());
        assert!(ctx.record_activity(ActivityKind::SanctumMessage, 1).is_empty());
        assert!(!ctx.mark_module_complete(Track::Builder, "intro"));
        assert_eq!(ctx.counters().sanctum_messages, 0);
        assert!(ctx.store().is_empty());
    }

    #[test]
    fn test_record_activity_persists_counters_and_ledger_together() {
        let mut ctx = ready();
        let granted = ctx.record_activity(ActivityKind::ContractDeployed, 1);
        assert_eq!(granted.iter().map(|d| d.id).collect::<Vec<_>>(), vec!["first_deploy"]);

        let store = ctx.into_store();
        let (counters, unlocked) = load_achievements(&store).unwrap().unwrap().into_state();
        assert_eq!(counters.contracts_deployed, 1);
        assert!(unlocked.contains("first_deploy"));
    }

    #[test]
    fn test_total_xp_decomposition() {
        let mut ctx = ready();
        ctx.record_activity(ActivityKind::SanctumMessage, 10);
        ctx.record_activity(ActivityKind::ContractDeployed, 1);

        assert_eq!(ctx.activity_xp(), 200);
        // first_words 50 + first_deploy 200
        assert_eq!(ctx.achievement_xp(), 250);
        assert_eq!(ctx.total_xp(), 450);
        assert_eq!(ctx.level().level, 3);
    }

    #[test]
    fn test_unknown_activity_is_noop() {
        let mut ctx = ready();
        assert!(ctx.record_activity_named("nft_minted", 3).is_empty());
        assert_eq!(*ctx.counters(), ActivityCounters::default());
        assert!(ctx.store().raw(ACHIEVEMENTS_NAMESPACE).is_none());

        ctx.record_activity_named("code_generation", 2);
        assert_eq!(ctx.counters().code_generations, 2);
    }

    #[test]
    fn test_lower_streak_does_not_persist() {
        let mut ctx = ready();
        ctx.record_activity(ActivityKind::QuizStreak, 5);
        let before = ctx.store().raw(ACHIEVEMENTS_NAMESPACE).map(String::from);

        assert!(ctx.record_activity(ActivityKind::QuizStreak, 2).is_empty());
        assert_eq!(ctx.counters().max_quiz_streak, 5);
        assert_eq!(ctx.store().raw(ACHIEVEMENTS_NAMESPACE).map(String::from), before);
    }

    #[test]
    fn test_corrupted_store_starts_over() {
        let store = MemoryStore::new().with_blob(ACHIEVEMENTS_NAMESPACE, "{{{ definitely not json");
        let ctx = ProgressionContext::open(store);

        assert_eq!(ctx.phase(), Phase::Ready);
        assert_eq!(*ctx.counters(), ActivityCounters::default());
        assert!(ctx.unlocked().is_empty());
        assert_eq!(ctx.hydration_errors().len(), 1);
    }

    #[test]
    fn test_corrupt_track_only_resets_that_track() {
        let mut good = TrackProgress::new();
        good.mark_complete("wallets");
        let store = MemoryStore::new()
            .with_blob("modules.explorer", &serde_json::to_string(&good).unwrap())
            .with_blob("modules.hacker", "not a map");

        let ctx = ProgressionContext::open(store);

        assert!(ctx.track(Track::Explorer).is_complete("wallets"));
        assert_eq!(ctx.track(Track::Hacker).completed_count(), 0);
        assert_eq!(ctx.hydration_errors().len(), 1);
        assert_eq!(ctx.hydration_errors()[0].namespace(), "modules.hacker");
    }

    #[test]
    fn test_module_completion_is_per_track_and_grants_nothing() {
        let mut ctx = ready();
        assert!(ctx.mark_module_complete(Track::Builder, "erc20"));
        assert!(!ctx.mark_module_complete(Track::Builder, "erc20"));

        assert!(ctx.track(Track::Builder).is_complete("erc20"));
        assert!(!ctx.track(Track::Founder).is_complete("erc20"));
        assert_eq!(ctx.total_xp(), 0);
        assert!(ctx.store().raw("modules.builder").is_some());
        assert!(ctx.store().raw("modules.founder").is_none());
    }

    #[test]
    fn test_failed_write_clears_connected_but_keeps_state() {
        let mut ctx = ready();
        ctx.store.set_read_only(true);

        let granted = ctx.record_activity(ActivityKind::ConceptLearned, 1);
        assert_eq!(granted.len(), 1);
        assert!(!ctx.is_connected());
        assert_eq!(ctx.counters().concepts_learned, 1);
        assert!(ctx.save().is_err());
    }

    #[test]
    fn test_successful_write_reconnects() {
        let mut ctx = ready();
        ctx.store.set_read_only(true);
        ctx.record_activity(ActivityKind::SanctumMessage, 1);
        assert!(!ctx.is_connected());

        ctx.store.set_read_only(false);
        ctx.record_activity(ActivityKind::SanctumMessage, 1);
        assert!(ctx.is_connected());

        // The reconnecting write carries everything recorded while offline.
        let (counters, unlocked) = load_achievements(ctx.store()).unwrap().unwrap().into_state();
        assert_eq!(counters.sanctum_messages, 2);
        assert!(unlocked.contains("first_words"));
    }

    #[test]
    fn test_unreadable_store_loads_fresh_and_disconnected() {
        let mut store = MemoryStore::new().with_blob(
            ACHIEVEMENTS_NAMESPACE,
            r#"{"counters":{"sanctumMessages":40},"unlocked":["first_words"]}"#,
        );
        store.set_unreadable(true);

        let ctx = ProgressionContext::open(store);

        assert_eq!(ctx.phase(), Phase::Ready);
        assert!(ctx.is_loaded());
        assert!(!ctx.is_connected());
        assert_eq!(ctx.total_xp(), 0);
        // One error per namespace: achievements plus every track.
        assert_eq!(ctx.hydration_errors().len(), 1 + Track::ALL.len());
        assert!(ctx
            .hydration_errors()
            .iter()
            .all(|e| matches!(e, HydrationError::Storage { .. })));
    }

    #[test]
    fn test_corrupt_blob_is_recorded_not_phased() {
        let store = MemoryStore::new().with_blob(ACHIEVEMENTS_NAMESPACE, "not json");
        let mut ctx = ProgressionContext::open(store);

        assert_eq!(ctx.phase(), Phase::Ready);
        assert!(ctx.is_connected());
        assert!(matches!(
            ctx.hydration_errors(),
            [HydrationError::Malformed { .. }]
        ));

        // Writing replaces the corrupt blob; the recorded error stays until
        // the next hydration.
        ctx.record_activity(ActivityKind::CodeGeneration, 1);
        assert_eq!(ctx.hydration_errors().len(), 1);
        ctx.hydrate();
        assert!(ctx.hydration_errors().is_empty());
        assert_eq!(ctx.counters().code_generations, 1);
    }

    #[test]
    fn test_failed_reset_keeps_state_and_disconnects() {
        let mut ctx = ready();
        ctx.record_activity(ActivityKind::ContractDeployed, 1);
        ctx.store.set_read_only(true);

        assert!(ctx.reset().is_err());
        assert!(!ctx.is_connected());
        assert_eq!(ctx.counters().contracts_deployed, 1);
        assert!(ctx.unlocked().contains("first_deploy"));
    }

    #[test]
    fn test_reconcile_on_load_grants_missing_unlocks() {
        let store = MemoryStore::new().with_blob(
            ACHIEVEMENTS_NAMESPACE,
            r#"{"counters":{"sanctumMessages":30},"unlocked":["first_words"]}"#,
        );
        let ctx = ProgressionContext::open(store);

        assert!(ctx.unlocked().contains("conversationalist"));
        let (_, saved) = load_achievements(ctx.store()).unwrap().unwrap().into_state();
        assert!(saved.contains("conversationalist"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut ctx = ready();
        ctx.record_activity(ActivityKind::CodeGeneration, 3);
        ctx.mark_module_complete(Track::Hacker, "reentrancy");

        ctx.reset().unwrap();

        assert_eq!(ctx.total_xp(), 0);
        assert!(ctx.unlocked().is_empty());
        assert_eq!(ctx.track(Track::Hacker).completed_count(), 0);
        assert!(ctx.store().is_empty());

        let reopened = ProgressionContext::open(ctx.into_store());
        assert_eq!(reopened.total_xp(), 0);
    }
}
