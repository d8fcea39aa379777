//! Hand signs.
//!
//! ## Choice
//!
//! One of Rock, Paper or Scissors. The beats-relation is cyclic:
//! Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
//!
//! Untyped input (UI strings, Python values, raw indices) enters through
//! `FromStr` and `TryFrom<u8>`, which are the only places an out-of-domain
//! value can be rejected.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::RpsError;

/// A hand sign selectable by either party.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All signs, in index order.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Index of this sign in `Choice::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Choice::Rock => 0,
            Choice::Paper => 1,
            Choice::Scissors => 2,
        }
    }

    /// The sign this one defeats.
    ///
    /// ```
    /// use rust_rps::core::Choice;
    ///
    /// assert_eq!(Choice::Rock.beats(), Choice::Scissors);
    /// assert_eq!(Choice::Scissors.beats(), Choice::Paper);
    /// assert_eq!(Choice::Paper.beats(), Choice::Rock);
    /// ```
    #[must_use]
    pub const fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    /// The sign that defeats this one.
    #[must_use]
    pub const fn beaten_by(self) -> Choice {
        match self {
            Choice::Rock => Choice::Paper,
            Choice::Paper => Choice::Scissors,
            Choice::Scissors => Choice::Rock,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }

    /// Emoji glyph used by the front-ends.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Choice::Rock => "🪨",
            Choice::Paper => "📄",
            Choice::Scissors => "✂️",
        }
    }

    /// Single-letter keyboard shortcut.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Choice::Rock => 'r',
            Choice::Paper => 'p',
            Choice::Scissors => 's',
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Choice {
    type Err = RpsError;

    /// Accepts the full name or the shortcut letter, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Choice::Rock),
            "paper" | "p" => Ok(Choice::Paper),
            "scissors" | "s" => Ok(Choice::Scissors),
            _ => Err(RpsError::InvalidChoice(s.to_owned())),
        }
    }
}

impl TryFrom<u8> for Choice {
    type Error = RpsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Choice::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| RpsError::InvalidChoice(value.to_string()))
    }
}
