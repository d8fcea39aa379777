//! # rust-rps
//!
//! A Rock-Paper-Scissors game core for desktop and terminal front-ends.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: No window, widget or animation code.
//!    Front-ends hold a `GameSession` and render the values it returns.
//!
//! 2. **Injected Randomness**: The computer's draws come from a seeded
//!    `GameRng` and an `OpponentPolicy`, never a global RNG, so any
//!    session can be replayed or scripted.
//!
//! 3. **Typed Input**: `Choice` is an enum; untyped input is parsed once at
//!    the boundary and rejected with `RpsError::InvalidChoice`.
//!
//! ## Modules
//!
//! - `core`: Choices, outcomes, errors, RNG, configuration
//! - `rules`: Outcome resolver and opponent policies
//! - `session`: Game session, score, streaks, badges, match rules, round log
//! - `export`: CSV export of the round log
//! - `display`: Text rendering shared by front-ends

pub mod core;
pub mod rules;
pub mod session;
pub mod export;
pub mod display;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Choice, Outcome,
    RpsError, Result,
    GameRng, GameRngState,
    SessionConfig,
};

pub use crate::rules::{resolve, OpponentPolicy, UniformOpponent, ScriptedOpponent};

pub use crate::session::{
    GameSession, TurnReport,
    Score, Round, Streaks,
    Achievement, Achievements,
    MatchRules, MatchStatus,
    RoundHistory, RoundRecord,
};
