//! Activity counters, activity XP, and the level curve.
//!
//! All functions here are pure; the progression context owns the state.

pub mod counters;
pub mod level;
pub mod xp;

pub use counters::{ActivityCounters, ActivityKind};
pub use level::{get_level, LevelInfo};
pub use xp::{activity_xp, calculate_activity_xp};
