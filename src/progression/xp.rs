use super::counters::ActivityCounters;
use crate::core::constants::*;

/// Activity XP from raw counts, using the fixed per-action weights.
///
/// Inputs are not clamped; the sum saturates at `u64::MAX`.
pub fn calculate_activity_xp(
    sanctum_messages: u64,
    code_generations: u64,
    contracts_deployed: u64,
    concepts_learned: u64,
    max_quiz_streak: u64,
) -> u64 {
    [
        (sanctum_messages, XP_PER_SANCTUM_MESSAGE),
        (code_generations, XP_PER_CODE_GENERATION),
        (contracts_deployed, XP_PER_CONTRACT_DEPLOYED),
        (concepts_learned, XP_PER_CONCEPT_LEARNED),
        (max_quiz_streak, XP_PER_QUIZ_STREAK),
    ]
    .into_iter()
    .fold(0u64, |total, (count, weight)| {
        total.saturating_add(count.saturating_mul(weight))
    })
}

/// Activity XP for a counters record.
pub fn activity_xp(counters: &ActivityCounters) -> u64 {
    calculate_activity_xp(
        counters.sanctum_messages,
        counters.code_generations,
        counters.contracts_deployed,
        counters.concepts_learned,
        counters.max_quiz_streak,
    )
}
