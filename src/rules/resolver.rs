//! Outcome resolution.

use crate::core::{Choice, Outcome};

/// Resolve a round.
///
/// Rock beats Scissors, Scissors beats Paper, Paper beats Rock. Total over
/// all nine input pairs and free of side effects.
///
/// ```
/// use rust_rps::core::{Choice, Outcome};
/// use rust_rps::rules::resolve;
///
/// assert_eq!(resolve(Choice::Rock, Choice::Scissors), Outcome::PlayerWins);
/// assert_eq!(resolve(Choice::Rock, Choice::Paper), Outcome::ComputerWins);
/// assert_eq!(resolve(Choice::Rock, Choice::Rock), Outcome::Tie);
/// ```
#[must_use]
pub fn resolve(player: Choice, computer: Choice) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats() == computer {
        Outcome::PlayerWins
    } else {
        Outcome::ComputerWins
    }
}
