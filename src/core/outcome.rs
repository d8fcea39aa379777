//! Round outcomes.

use serde::{Deserialize, Serialize};

/// Result classification of a single round, from the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player's sign beats the computer's.
    PlayerWins,
    /// The computer's sign beats the player's.
    ComputerWins,
    /// Both picked the same sign.
    Tie,
}

impl Outcome {
    /// Check if the player won.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Outcome::PlayerWins)
    }

    /// Check if the computer won.
    #[must_use]
    pub const fn is_computer_win(self) -> bool {
        matches!(self, Outcome::ComputerWins)
    }

    /// Check if the round was a tie.
    #[must_use]
    pub const fn is_tie(self) -> bool {
        matches!(self, Outcome::Tie)
    }

    /// The same round seen from the computer's side.
    #[must_use]
    pub const fn flip(self) -> Outcome {
        match self {
            Outcome::PlayerWins => Outcome::ComputerWins,
            Outcome::ComputerWins => Outcome::PlayerWins,
            Outcome::Tie => Outcome::Tie,
        }
    }

    /// Short label used in history lines and CSV rows.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Outcome::PlayerWins => "Win",
            Outcome::ComputerWins => "Lose",
            Outcome::Tie => "Tie",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
