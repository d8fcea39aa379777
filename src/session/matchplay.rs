//! Best-of-N match rules.

use serde::{Deserialize, Serialize};

use super::score::Score;
use crate::core::config::normalize_best_of;
use crate::core::Result;

/// Match length and the derived win target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    best_of: u32,
}

impl MatchRules {
    /// Create match rules. Even lengths round up to the next odd one.
    pub fn new(best_of: u32) -> Result<Self> {
        Ok(Self {
            best_of: normalize_best_of(best_of)?,
        })
    }

    #[must_use]
    pub fn best_of(&self) -> u32 {
        self.best_of
    }

    /// Wins needed to take the match.
    ///
    /// ```
    /// use rust_rps::session::MatchRules;
    ///
    /// assert_eq!(MatchRules::new(5).unwrap().target_wins(), 3);
    /// assert_eq!(MatchRules::new(1).unwrap().target_wins(), 1);
    /// ```
    #[must_use]
    pub fn target_wins(&self) -> u32 {
        self.best_of / 2 + 1
    }

    /// Match status for a score. Ties never count toward the target.
    ///
    /// This only looks at the counters; `GameSession` keeps the first
    /// decided status so later rounds cannot overturn it.
    #[must_use]
    pub fn status(&self, score: &Score) -> MatchStatus {
        let target = self.target_wins();
        if score.player_wins >= target {
            MatchStatus::PlayerWon
        } else if score.computer_wins >= target {
            MatchStatus::ComputerWon
        } else {
            MatchStatus::InProgress
        }
    }
}

impl Default for MatchRules {
    fn default() -> Self {
        Self { best_of: 5 }
    }
}

/// Where the current match stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    InProgress,
    PlayerWon,
    ComputerWon,
}

impl MatchStatus {
    #[must_use]
    pub fn is_decided(self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, RpsError};

    #[test]
    fn test_target_wins() {
        assert_eq!(MatchRules::new(3).unwrap().target_wins(), 2);
        assert_eq!(MatchRules::new(21).unwrap().target_wins(), 11);
        // 4 rounds up to 5
        let rules = MatchRules::new(4).unwrap();
        assert_eq!(rules.best_of(), 5);
        assert_eq!(rules.target_wins(), 3);
    }

    #[test]
    fn test_invalid_length() {
        assert!(matches!(MatchRules::new(0), Err(RpsError::InvalidConfig { .. })));
        assert!(MatchRules::new(30).is_err());
    }

    #[test]
    fn test_status() {
        let rules = MatchRules::new(3).unwrap();
        let mut score = Score::new();
        assert_eq!(rules.status(&score), MatchStatus::InProgress);

        score.record(Outcome::PlayerWins);
        score.record(Outcome::Tie);
        score.record(Outcome::Tie);
        score.record(Outcome::ComputerWins);
        assert_eq!(rules.status(&score), MatchStatus::InProgress);

        score.record(Outcome::ComputerWins);
        assert_eq!(rules.status(&score), MatchStatus::ComputerWon);
        assert!(rules.status(&score).is_decided());
    }

    #[test]
    fn test_default_is_best_of_five() {
        assert_eq!(MatchRules::default(), MatchRules::new(5).unwrap());
    }
}
