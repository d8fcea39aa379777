//! Opponent policies.
//!
//! The session never calls a global RNG: it owns a `GameRng` and asks an
//! `OpponentPolicy` for the computer's sign each round. Production play uses
//! `UniformOpponent`; tests and replays use `ScriptedOpponent` to force the
//! draws they need.

use crate::core::{Choice, GameRng};

/// Policy for picking the computer's sign.
pub trait OpponentPolicy: Send {
    /// Pick the computer's sign for the next round.
    fn choose(&mut self, rng: &mut GameRng) -> Choice;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Uniform random opponent.
///
/// Draws each sign with probability 1/3 from the session RNG.
#[derive(Clone, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose(&mut self, rng: &mut GameRng) -> Choice {
        rng.draw_choice()
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}

/// Replays a fixed sequence of signs, wrapping around at the end.
///
/// Ignores the RNG entirely.
#[derive(Clone, Debug)]
pub struct ScriptedOpponent {
    script: Vec<Choice>,
    cursor: usize,
}

impl ScriptedOpponent {
    /// Create a scripted opponent.
    ///
    /// Panics if `script` is empty.
    pub fn new(script: impl IntoIterator<Item = Choice>) -> Self {
        let script: Vec<Choice> = script.into_iter().collect();
        assert!(!script.is_empty(), "Script must contain at least one choice");
        Self { script, cursor: 0 }
    }

    /// Always play the same sign.
    pub fn always(choice: Choice) -> Self {
        Self::new([choice])
    }

    /// Number of signs played so far.
    #[must_use]
    pub fn played(&self) -> usize {
        self.cursor
    }
}

impl OpponentPolicy for ScriptedOpponent {
    fn choose(&mut self, _rng: &mut GameRng) -> Choice {
        let choice = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        choice
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
