//! Round schedule: which rounds reveal the fugitive.
//!
//! Rounds are numbered from 1. Round `r` is a reveal round iff entry
//! `r - 1` of the schedule is `true`. Round 0 means "not started" and is
//! never a reveal round.

use serde::{Deserialize, Serialize};

/// Reveal rounds of the classic 24-round game.
const CLASSIC_REVEALS: [u32; 5] = [3, 8, 13, 18, 24];

/// Number of rounds in the classic game.
const CLASSIC_ROUNDS: u32 = 24;

/// Ordered reveal flags, one per round.
///
/// ```
/// use rust_yard::core::RoundSchedule;
///
/// let schedule = RoundSchedule::new(vec![false, true, false]);
/// assert_eq!(schedule.len(), 3);
/// assert!(!schedule.is_reveal(1));
/// assert!(schedule.is_reveal(2));
/// assert!(!schedule.is_reveal(4)); // past the end
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundSchedule {
    rounds: Vec<bool>,
}

impl RoundSchedule {
    /// Create a schedule from per-round reveal flags.
    ///
    /// Round numbers are `u32`; flags past `u32::MAX` rounds are dropped.
    #[must_use]
    pub fn new(mut rounds: Vec<bool>) -> Self {
        rounds.truncate(round_count(usize::MAX) as usize);
        Self { rounds }
    }

    /// Create a schedule of `length` rounds revealing on the given round numbers.
    ///
    /// Round numbers outside `1..=length` are ignored.
    #[must_use]
    pub fn with_reveals(length: u32, reveals: &[u32]) -> Self {
        let rounds = (1..=length).map(|r| reveals.contains(&r)).collect();
        Self { rounds }
    }

    /// The classic schedule: 24 rounds, revealing on 3, 8, 13, 18 and 24.
    #[must_use]
    pub fn classic() -> Self {
        Self::with_reveals(CLASSIC_ROUNDS, &CLASSIC_REVEALS)
    }

    /// Number of rounds.
    #[must_use]
    pub fn len(&self) -> u32 {
        round_count(self.rounds.len())
    }

    /// Check if the schedule has no rounds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Check if round `round` (1-based) is a reveal round.
    #[must_use]
    pub fn is_reveal(&self, round: u32) -> bool {
        round
            .checked_sub(1)
            .and_then(|i| self.rounds.get(i as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Rounds left to play after `current_round`.
    #[must_use]
    pub fn remaining(&self, current_round: u32) -> u32 {
        self.len().saturating_sub(current_round)
    }

    /// Iterate over reveal round numbers.
    pub fn reveal_rounds(&self) -> impl Iterator<Item = u32> + '_ {
        (1..=self.len())
            .zip(self.rounds.iter())
            .filter(|(_, &reveal)| reveal)
            .map(|(round, _)| round)
    }

    /// Raw flags, index `r - 1` for round `r`.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.rounds
    }
}

/// Number of rounds as a round number, saturating at `u32::MAX`.
fn round_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl From<Vec<bool>> for RoundSchedule {
    fn from(rounds: Vec<bool>) -> Self {
        Self::new(rounds)
    }
}
