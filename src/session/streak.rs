//! Win/loss streak tracking.

use serde::{Deserialize, Serialize};

use crate::core::Outcome;

/// Current and best streaks.
///
/// `current` is signed: positive counts consecutive player wins, negative
/// counts consecutive computer wins. Ties leave every field untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streaks {
    pub current: i32,
    pub best_player: u32,
    pub best_computer: u32,
}

impl Streaks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one round into the streaks.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => {
                self.current = if self.current >= 0 { self.current.saturating_add(1) } else { 1 };
                self.best_player = self.best_player.max(self.current.unsigned_abs());
            }
            Outcome::ComputerWins => {
                self.current = if self.current <= 0 { self.current.saturating_sub(1) } else { -1 };
                self.best_computer = self.best_computer.max(self.current.unsigned_abs());
            }
            Outcome::Tie => {}
        }
    }

    /// Length of the player's current winning run (0 if the computer leads).
    #[must_use]
    pub fn player_run(&self) -> u32 {
        self.current.max(0).unsigned_abs()
    }

    /// Clear the current streak, keeping the bests.
    pub fn reset_current(&mut self) {
        self.current = 0;
    }
}
