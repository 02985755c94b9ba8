//! Achievement evaluation: which not-yet-unlocked achievements are satisfied.

use super::data::ALL_ACHIEVEMENTS;
use super::ledger::UnlockedSet;
use super::types::AchievementDef;
use crate::progression::ActivityCounters;

/// Catalog entries that are satisfied by `counters` and not yet in
/// `unlocked`. Does not modify the ledger; the caller merges.
pub fn evaluate(
    counters: &ActivityCounters,
    unlocked: &UnlockedSet,
) -> Vec<&'static AchievementDef> {
    evaluate_catalog(ALL_ACHIEVEMENTS, counters, unlocked)
}

/// Same as [`evaluate`] against an arbitrary catalog.
pub fn evaluate_catalog<'a>(
    catalog: &'a [AchievementDef],
    counters: &ActivityCounters,
    unlocked: &UnlockedSet,
) -> Vec<&'a AchievementDef> {
    catalog
        .iter()
        .filter(|def| !unlocked.contains(def.id))
        .filter(|def| def.is_satisfied(counters))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::types::AchievementCategory;

    fn ids(defs: &[&AchievementDef]) -> Vec<&'static str> {
        defs.iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_fresh_user_unlocks_nothing() {
        let found = evaluate(&ActivityCounters::default(), &UnlockedSet::new());
        assert!(found.is_empty());
    }

    #[test]
    fn test_already_unlocked_is_excluded() {
        let counters = ActivityCounters {
            sanctum_messages: 1,
            ..Default::default()
        };
        let mut unlocked = UnlockedSet::new();
        assert_eq!(ids(&evaluate(&counters, &unlocked)), vec!["first_words"]);

        unlocked.unlock("first_words", 0);
        assert!(evaluate(&counters, &unlocked).is_empty());
    }

    #[test]
    fn test_second_evaluation_is_empty() {
        let counters = ActivityCounters {
            sanctum_messages: 30,
            contracts_deployed: 6,
            concepts_learned: 5,
            code_generations: 1,
            max_quiz_streak: 3,
        };
        let mut unlocked = UnlockedSet::new();

        let first = evaluate(&counters, &unlocked);
        assert!(!first.is_empty());
        unlocked.merge(first.iter().map(|d| d.id), 0);

        assert!(evaluate(&counters, &unlocked).is_empty());
    }

    #[test]
    fn test_shared_counter_unlocks_together() {
        let counters = ActivityCounters {
            concepts_learned: 5,
            ..Default::default()
        };
        let found = ids(&evaluate(&counters, &UnlockedSet::new()));
        assert_eq!(found, vec!["curious_mind", "scholar"]);
    }

    #[test]
    fn test_custom_catalog() {
        const CATALOG: &[AchievementDef] = &[AchievementDef {
            id: "big_reader",
            name: "Big Reader",
            description: "Learn 5 concepts",
            category: AchievementCategory::Learning,
            xp: 500,
            unlock: |c| c.concepts_learned >= 5,
        }];

        let mut counters = ActivityCounters {
            concepts_learned: 4,
            ..Default::default()
        };
        let mut unlocked = UnlockedSet::new();
        assert!(evaluate_catalog(CATALOG, &counters, &unlocked).is_empty());

        counters.concepts_learned = 5;
        let found = evaluate_catalog(CATALOG, &counters, &unlocked);
        assert_eq!(found.len(), 1);
        unlocked.merge(found.iter().map(|d| d.id), 0);

        counters.concepts_learned = 10;
        assert!(evaluate_catalog(CATALOG, &counters, &unlocked).is_empty());
    }
}
