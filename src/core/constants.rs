// XP weights (per unit of activity)
//
// Every user's activity XP is recomputed live from these values, so changing
// one retroactively re-scores all historical activity.
pub const XP_PER_SANCTUM_MESSAGE: u64 = 10;
pub const XP_PER_CODE_GENERATION: u64 = 25;
pub const XP_PER_CONTRACT_DEPLOYED: u64 = 100;
pub const XP_PER_CONCEPT_LEARNED: u64 = 50;
pub const XP_PER_QUIZ_STREAK: u64 = 15;

// Level curve
// Index 0 = Level 1. Must be strictly increasing and start at 0.
pub const LEVEL_THRESHOLDS: [u64; 12] = [
    0,     // Level 1
    100,   // Level 2
    250,   // Level 3
    500,   // Level 4
    1000,  // Level 5
    2000,  // Level 6
    3500,  // Level 7
    5500,  // Level 8
    8000,  // Level 9
    12000, // Level 10
    17000, // Level 11
    25000, // Level 12 (max)
];

// Index 0 = Level 1. The last entry is the terminal title for every level
// past the end of the table.
pub const LEVEL_TITLES: [&str; 10] = [
    "Novice",
    "Apprentice",
    "Initiate",
    "Coder",
    "Builder",
    "Engineer",
    "Architect",
    "Auditor",
    "Wizard",
    "Mythic",
];

// Storage
pub const ACHIEVEMENTS_NAMESPACE: &str = "achievements";
pub const MODULES_NAMESPACE_PREFIX: &str = "modules.";
pub const DATA_DIR_ENV: &str = "ACADEMY_DATA_DIR";
pub const DEFAULT_DATA_DIR_NAME: &str = ".contract-academy";
