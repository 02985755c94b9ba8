//! Achievement catalog types.

use crate::progression::ActivityCounters;

/// Achievement categories for organization in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementCategory {
    Chat,
    Code,
    Deploy,
    Learning,
    Quiz,
    Meta,
}

impl AchievementCategory {
    /// All categories in display order.
    pub const ALL: [AchievementCategory; 6] = [
        AchievementCategory::Chat,
        AchievementCategory::Code,
        AchievementCategory::Deploy,
        AchievementCategory::Learning,
        AchievementCategory::Quiz,
        AchievementCategory::Meta,
    ];

    /// Display name for the category.
    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Chat => "Sanctum Chat",
            AchievementCategory::Code => "Code Generation",
            AchievementCategory::Deploy => "Deployment",
            AchievementCategory::Learning => "Learning",
            AchievementCategory::Quiz => "Quizzes",
            AchievementCategory::Meta => "Meta",
        }
    }
}

/// Unlock condition over the current counters.
pub type UnlockPredicate = fn(&ActivityCounters) -> bool;

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    /// Stable identifier; this is what gets persisted.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    /// XP granted while the achievement is unlocked.
    pub xp: u64,
    pub unlock: UnlockPredicate,
}

impl AchievementDef {
    pub fn is_satisfied(&self, counters: &ActivityCounters) -> bool {
        (self.unlock)(counters)
    }
}
