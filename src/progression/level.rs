//! Level curve: total XP to level, title and progress.

use crate::core::constants::{LEVEL_THRESHOLDS, LEVEL_TITLES};

/// Derived level state for a total XP value. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelInfo {
    pub level: u32,
    /// XP earned since reaching `level`.
    pub current_xp: u64,
    /// XP span of the current level.
    pub next_level_xp: u64,
    /// Percent through the current level, in `[0, 100]`.
    pub progress: f64,
    pub title: &'static str,
}

impl LevelInfo {
    pub fn is_max_level(&self) -> bool {
        self.level as usize >= LEVEL_THRESHOLDS.len()
    }
}

/// Highest defined level.
pub fn max_level() -> u32 {
    LEVEL_THRESHOLDS.len() as u32
}

/// Title for a level. Levels past the end of the title table share the
/// last (terminal) title.
pub fn title_for_level(level: u32) -> &'static str {
    let index = (level.max(1) as usize - 1).min(LEVEL_TITLES.len() - 1);
    LEVEL_TITLES[index]
}

/// Map total XP onto the level curve.
///
/// At the max level the span is held at the final gap and progress
/// saturates at 100.
pub fn get_level(total_xp: u64) -> LevelInfo {
    // Number of thresholds reached; T[0] is 0 so this is at least 1.
    let reached = LEVEL_THRESHOLDS.partition_point(|&t| t <= total_xp);
    let level_index = reached.saturating_sub(1);
    let floor = LEVEL_THRESHOLDS[level_index];
    let current_xp = total_xp - floor;

    let (next_level_xp, progress) = match LEVEL_THRESHOLDS.get(level_index + 1) {
        Some(&ceiling) => {
            let span = ceiling - floor;
            let pct = current_xp as f64 / span as f64 * 100.0;
            (span, pct.clamp(0.0, 100.0))
        }
        None => (final_gap(), 100.0),
    };

    let level = level_index as u32 + 1;
    LevelInfo {
        level,
        current_xp,
        next_level_xp,
        progress,
        title: title_for_level(level),
    }
}

fn final_gap() -> u64 {
    let n = LEVEL_THRESHOLDS.len();
    LEVEL_THRESHOLDS[n - 1] - LEVEL_THRESHOLDS[n - 2]
}
