//! Cumulative activity counters.

use crate::error::UnknownActivityKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A kind of activity a collaborator can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    SanctumMessage,
    CodeGeneration,
    ContractDeployed,
    ConceptLearned,
    /// Reports a quiz streak length; only a new high moves the counter.
    QuizStreak,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 5] = [
        ActivityKind::SanctumMessage,
        ActivityKind::CodeGeneration,
        ActivityKind::ContractDeployed,
        ActivityKind::ConceptLearned,
        ActivityKind::QuizStreak,
    ];

    /// Name used by collaborators when reporting the activity.
    pub fn wire_name(&self) -> &'static str {
        match self {
            ActivityKind::SanctumMessage => "sanctum_message",
            ActivityKind::CodeGeneration => "code_generation",
            ActivityKind::ContractDeployed => "contract_deployed",
            ActivityKind::ConceptLearned => "concept_learned",
            ActivityKind::QuizStreak => "quiz_streak",
        }
    }

    /// Streak-like kinds keep the historical maximum instead of summing.
    pub fn is_high_water_mark(&self) -> bool {
        matches!(self, ActivityKind::QuizStreak)
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for ActivityKind {
    type Err = UnknownActivityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityKind::ALL
            .into_iter()
            .find(|kind| kind.wire_name() == s)
            .ok_or_else(|| UnknownActivityKind(s.to_string()))
    }
}

/// Per-user cumulative activity counts. Every field only ever grows.
///
/// Missing fields deserialize as zero so blobs written before a counter
/// existed still load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityCounters {
    pub sanctum_messages: u64,
    pub code_generations: u64,
    pub contracts_deployed: u64,
    pub concepts_learned: u64,
    /// Best quiz streak ever reached, not the current streak.
    pub max_quiz_streak: u64,
}

impl ActivityCounters {
    pub fn get(&self, kind: ActivityKind) -> u64 {
        match kind {
            ActivityKind::SanctumMessage => self.sanctum_messages,
            ActivityKind::CodeGeneration => self.code_generations,
            ActivityKind::ContractDeployed => self.contracts_deployed,
            ActivityKind::ConceptLearned => self.concepts_learned,
            ActivityKind::QuizStreak => self.max_quiz_streak,
        }
    }

    fn slot_mut(&mut self, kind: ActivityKind) -> &mut u64 {
        match kind {
            ActivityKind::SanctumMessage => &mut self.sanctum_messages,
            ActivityKind::CodeGeneration => &mut self.code_generations,
            ActivityKind::ContractDeployed => &mut self.contracts_deployed,
            ActivityKind::ConceptLearned => &mut self.concepts_learned,
            ActivityKind::QuizStreak => &mut self.max_quiz_streak,
        }
    }

    /// Apply one activity report.
    ///
    /// Incremental kinds add `amount` (saturating); streak kinds take
    /// `max(old, amount)`. Returns true if the counter changed.
    pub fn record(&mut self, kind: ActivityKind, amount: u64) -> bool {
        let slot = self.slot_mut(kind);
        let old = *slot;
        *slot = if kind.is_high_water_mark() {
            old.max(amount)
        } else {
            old.saturating_add(amount)
        };
        *slot != old
    }
}
