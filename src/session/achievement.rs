//! Session-only badges.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::streak::Streaks;
use crate::core::Outcome;

/// Player streak length that unlocks `Achievement::HotStreak`.
pub const HOT_STREAK_LENGTH: u32 = 3;

/// A badge the player can unlock once per session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Achievement {
    /// First round won.
    FirstWin,
    /// Three player wins in a row.
    HotStreak,
}

impl Achievement {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Achievement::FirstWin => "First Win",
            Achievement::HotStreak => "Hot Streak (3)",
        }
    }
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Unlocked badges, kept sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievements {
    unlocked: BTreeSet<Achievement>,
}

impl Achievements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unlock a badge. Returns `true` if it was not unlocked before.
    pub fn unlock(&mut self, achievement: Achievement) -> bool {
        self.unlocked.insert(achievement)
    }

    #[must_use]
    pub fn contains(&self, achievement: Achievement) -> bool {
        self.unlocked.contains(&achievement)
    }

    pub fn iter(&self) -> impl Iterator<Item = Achievement> + '_ {
        self.unlocked.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.unlocked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unlocked.is_empty()
    }

    /// Check a finished round against every badge rule.
    ///
    /// `streaks` must already include the round. Returns the badges
    /// unlocked by this round, in order.
    pub fn evaluate(&mut self, outcome: Outcome, streaks: &Streaks) -> Vec<Achievement> {
        let mut fresh = Vec::new();
        if outcome.is_player_win() {
            if self.unlock(Achievement::FirstWin) {
                fresh.push(Achievement::FirstWin);
            }
            if streaks.player_run() >= HOT_STREAK_LENGTH && self.unlock(Achievement::HotStreak) {
                fresh.push(Achievement::HotStreak);
            }
        }
        fresh
    }
}
