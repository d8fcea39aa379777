//! Core types: hand signs, outcomes, errors, RNG, configuration.
//!
//! Everything here is presentation-agnostic. Front-ends build on these
//! types through `GameSession` rather than reaching into the session state.

pub mod choice;
pub mod outcome;
pub mod error;
pub mod rng;
pub mod config;

pub use choice::Choice;
pub use outcome::Outcome;
pub use error::{Result, RpsError};
pub use rng::{GameRng, GameRngState};
pub use config::{SessionConfig, MAX_BEST_OF};
