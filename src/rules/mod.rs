//! Game rules: the outcome resolver and the computer's opponent policies.
//!
//! - `resolve`: the fixed, cyclic beats-relation
//! - `OpponentPolicy`: how the computer picks its sign

mod resolver;
mod opponent;

pub use resolver::resolve;
pub use opponent::{OpponentPolicy, ScriptedOpponent, UniformOpponent};
