//! Progression and achievement engine for the contract academy.
//!
//! Turns activity reports (chat messages, code generations, deployments,
//! concepts learned, quiz streaks) into activity XP, a sticky set of
//! unlocked achievements, and a derived level, persisted per namespace.

pub mod achievements;
pub mod build_info;
pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod modules;
pub mod progression;
pub mod storage;

pub use achievements::{AchievementCategory, AchievementDef, UnlockedSet};
pub use context::{Phase, ProgressionContext};
pub use error::{HydrationError, StorageError, UnknownActivityKind, UnknownTrack};
pub use modules::{Track, TrackProgress};
pub use progression::{calculate_activity_xp, get_level, ActivityCounters, ActivityKind, LevelInfo};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
