//! Game session: score, streaks, badges, match rules and the round log.
//!
//! `GameSession` is the only type a front-end needs to hold. Everything
//! else in this module is a value it hands back for rendering.

mod game;
mod score;
mod round;
mod streak;
mod achievement;
mod matchplay;
mod history;

pub use game::{GameSession, TurnReport};
pub use score::Score;
pub use round::Round;
pub use streak::Streaks;
pub use achievement::{Achievement, Achievements, HOT_STREAK_LENGTH};
pub use matchplay::{MatchRules, MatchStatus};
pub use history::{RoundHistory, RoundRecord};
