//! Achievement system module.
//!
//! A static catalog of achievements, a pure evaluator that finds newly
//! satisfied entries, and a ledger of unlocked ids that only ever grows.
//! Counters and the ledger persist together under the `achievements`
//! namespace.

pub mod data;
pub mod evaluator;
pub mod ledger;
pub mod persistence;
pub mod types;

pub use data::{get_achievement_def, get_achievements_by_category, ALL_ACHIEVEMENTS};
pub use evaluator::{evaluate, evaluate_catalog};
pub use ledger::UnlockedSet;
pub use persistence::{load_achievements, save_achievements, AchievementSave};
pub use types::{AchievementCategory, AchievementDef};

/// Unlocked/total counts for a category.
pub fn count_by_category(unlocked: &UnlockedSet, category: AchievementCategory) -> (usize, usize) {
    let in_category = get_achievements_by_category(category);
    let done = in_category.iter().filter(|a| unlocked.contains(a.id)).count();
    (done, in_category.len())
}

/// Share of the catalog unlocked (0.0 - 100.0). Ids no longer in the
/// catalog are not counted.
pub fn unlock_percentage(unlocked: &UnlockedSet) -> f32 {
    let total = ALL_ACHIEVEMENTS.len();
    if total == 0 {
        return 0.0;
    }
    let done = ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| unlocked.contains(a.id))
        .count();
    (done as f32 / total as f32) * 100.0
}
