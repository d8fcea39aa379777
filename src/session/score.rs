//! Cumulative score.

use serde::{Deserialize, Serialize};

use crate::core::Outcome;

/// Counts of player wins, computer wins and ties since the last reset.
///
/// `total()` always equals the number of rounds recorded since the last
/// reset, because `record` is the only way to raise a counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub player_wins: u32,
    pub computer_wins: u32,
    pub ties: u32,
}

impl Score {
    /// Create an empty score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one round.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.player_wins = self.player_wins.saturating_add(1),
            Outcome::ComputerWins => self.computer_wins = self.computer_wins.saturating_add(1),
            Outcome::Tie => self.ties = self.ties.saturating_add(1),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rounds counted since the last reset. Saturates at `u32::MAX`.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.player_wins
            .saturating_add(self.computer_wins)
            .saturating_add(self.ties)
    }

    /// Share of rounds the player won (0.0 when nothing was played).
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.player_wins as f64 / self.total() as f64
        }
    }

    /// The counters as a `(player_wins, computer_wins, ties)` tuple.
    #[must_use]
    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.player_wins, self.computer_wins, self.ties)
    }
}
