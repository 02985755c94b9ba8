//! Static achievement definitions.

use super::types::{AchievementCategory, AchievementDef};

/// All achievement definitions in display order.
///
/// Ids are persisted, so an id must never be reused for a different
/// achievement. Predicates may be changed freely: unlocks are sticky.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // SANCTUM CHAT
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "first_words",
        name: "First Words",
        description: "Send your first message in the Sanctum",
        category: AchievementCategory::Chat,
        xp: 50,
        unlock: |c| c.sanctum_messages >= 1,
    },
    AchievementDef {
        id: "conversationalist",
        name: "Conversationalist",
        description: "Send 25 messages in the Sanctum",
        category: AchievementCategory::Chat,
        xp: 150,
        unlock: |c| c.sanctum_messages >= 25,
    },
    AchievementDef {
        id: "sanctum_regular",
        name: "Sanctum Regular",
        description: "Send 100 messages in the Sanctum",
        category: AchievementCategory::Chat,
        xp: 400,
        unlock: |c| c.sanctum_messages >= 100,
    },
    // ═══════════════════════════════════════════════════════════════
    // CODE GENERATION
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "first_generation",
        name: "Hello, Contract",
        description: "Generate your first smart contract",
        category: AchievementCategory::Code,
        xp: 75,
        unlock: |c| c.code_generations >= 1,
    },
    AchievementDef {
        id: "code_smith",
        name: "Code Smith",
        description: "Generate 10 smart contracts",
        category: AchievementCategory::Code,
        xp: 250,
        unlock: |c| c.code_generations >= 10,
    },
    AchievementDef {
        id: "contract_factory",
        name: "Contract Factory",
        description: "Generate 50 smart contracts",
        category: AchievementCategory::Code,
        xp: 750,
        unlock: |c| c.code_generations >= 50,
    },
    // ═══════════════════════════════════════════════════════════════
    // DEPLOYMENT
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "first_deploy",
        name: "Liftoff",
        description: "Deploy your first contract",
        category: AchievementCategory::Deploy,
        xp: 200,
        unlock: |c| c.contracts_deployed >= 1,
    },
    AchievementDef {
        id: "serial_deployer",
        name: "Serial Deployer",
        description: "Deploy 5 contracts",
        category: AchievementCategory::Deploy,
        xp: 500,
        unlock: |c| c.contracts_deployed >= 5,
    },
    AchievementDef {
        id: "mainnet_veteran",
        name: "Mainnet Veteran",
        description: "Deploy 25 contracts",
        category: AchievementCategory::Deploy,
        xp: 1500,
        unlock: |c| c.contracts_deployed >= 25,
    },
    // ═══════════════════════════════════════════════════════════════
    // LEARNING
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "curious_mind",
        name: "Curious Mind",
        description: "Learn your first concept",
        category: AchievementCategory::Learning,
        xp: 50,
        unlock: |c| c.concepts_learned >= 1,
    },
    AchievementDef {
        id: "scholar",
        name: "Scholar",
        description: "Learn 5 concepts",
        category: AchievementCategory::Learning,
        xp: 500,
        unlock: |c| c.concepts_learned >= 5,
    },
    AchievementDef {
        id: "sage",
        name: "Sage",
        description: "Learn 20 concepts",
        category: AchievementCategory::Learning,
        xp: 1000,
        unlock: |c| c.concepts_learned >= 20,
    },
    // ═══════════════════════════════════════════════════════════════
    // QUIZZES
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "quiz_streak_3",
        name: "Hat Trick",
        description: "Answer 3 quiz questions correctly in a row",
        category: AchievementCategory::Quiz,
        xp: 100,
        unlock: |c| c.max_quiz_streak >= 3,
    },
    AchievementDef {
        id: "quiz_streak_10",
        name: "Unbroken",
        description: "Answer 10 quiz questions correctly in a row",
        category: AchievementCategory::Quiz,
        xp: 400,
        unlock: |c| c.max_quiz_streak >= 10,
    },
    // ═══════════════════════════════════════════════════════════════
    // META
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "polymath",
        name: "Polymath",
        description: "Chat, generate, deploy and learn at least once each",
        category: AchievementCategory::Meta,
        xp: 300,
        unlock: |c| {
            c.sanctum_messages >= 1
                && c.code_generations >= 1
                && c.contracts_deployed >= 1
                && c.concepts_learned >= 1
        },
    },
];

/// Get the definition for an achievement id.
pub fn get_achievement_def(id: &str) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Get all achievements in a category.
pub fn get_achievements_by_category(
    category: AchievementCategory,
) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| a.category == category)
        .collect()
}
