//! A single resolved round.

use serde::Serialize;

use crate::core::{Choice, Outcome};
use crate::rules::resolve;

/// One player/computer choice pair with its outcome.
///
/// The outcome is always derived from the two choices, so a `Round` can
/// only be built through `Round::new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Round {
    player: Choice,
    computer: Choice,
    outcome: Outcome,
}

impl Round {
    /// Resolve a round from both choices.
    #[must_use]
    pub fn new(player: Choice, computer: Choice) -> Self {
        Self {
            player,
            computer,
            outcome: resolve(player, computer),
        }
    }

    /// The player's sign.
    #[must_use]
    pub fn player(&self) -> Choice {
        self.player
    }

    /// The computer's sign.
    #[must_use]
    pub fn computer(&self) -> Choice {
        self.computer
    }

    /// The outcome from the player's side.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The sign that won the round, if any.
    #[must_use]
    pub fn winning_choice(&self) -> Option<Choice> {
        match self.outcome {
            Outcome::PlayerWins => Some(self.player),
            Outcome::ComputerWins => Some(self.computer),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} vs {} -> {}",
            self.player, self.computer, self.outcome
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_derives_outcome() {
        let round = Round::new(Choice::Rock, Choice::Scissors);
        assert_eq!(round.player(), Choice::Rock);
        assert_eq!(round.computer(), Choice::Scissors);
        assert_eq!(round.outcome(), Outcome::PlayerWins);
        assert_eq!(round.winning_choice(), Some(Choice::Rock));
    }

    #[test]
    fn test_round_winning_choice() {
        assert_eq!(
            Round::new(Choice::Scissors, Choice::Rock).winning_choice(),
            Some(Choice::Rock)
        );
        assert_eq!(Round::new(Choice::Paper, Choice::Paper).winning_choice(), None);
    }

    #[test]
    fn test_round_display() {
        let round = Round::new(Choice::Paper, Choice::Rock);
        assert_eq!(round.to_string(), "Paper vs Rock -> Win");
    }
}
