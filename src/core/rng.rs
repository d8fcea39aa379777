//! Deterministic random number generation for the computer's draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Serializable**: O(1) state capture
//! - **Context streams**: Independent sequences for different purposes
//!
//! ## Usage
//!
//! ```
//! use rust_rps::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//!
//! // Same seed, same draws
//! assert_eq!(rng.draw_choice(), replay.draw_choice());
//!
//! // Cosmetic randomness gets its own stream so it never shifts the draws
//! let mut confetti = rng.for_context("confetti");
//! let _ = confetti.gen_range_usize(0..80);
//! assert_eq!(rng.draw_choice(), replay.draw_choice());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::choice::Choice;

/// Deterministic RNG backing the opponent.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from OS entropy.
    ///
    /// The chosen seed is still recorded, so a session can be replayed
    /// from `seed()`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// on every platform and toolchain.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(context_seed(self.seed, context))
    }

    /// Draw a sign uniformly at random.
    pub fn draw_choice(&mut self) -> Choice {
        Choice::ALL[self.gen_range_usize(0..Choice::ALL.len())]
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Capture the current state.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }
}

/// Golden-ratio offset, so seed 0 and an empty context still mix.
const CONTEXT_MIX: u64 = 0x9E3779B97F4A7C15;
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// FNV-1a over the context bytes, starting from the mixed seed.
fn context_seed(seed: u64, context: &str) -> u64 {
    context.bytes().fold(seed ^ CONTEXT_MIX, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Serializable RNG state.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many draws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed the stream was created from
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.draw_choice(), rng2.draw_choice());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_draw_choice_covers_all_signs() {
        let mut rng = GameRng::new(7);
        let mut counts = [0usize; 3];

        for _ in 0..3000 {
            counts[rng.draw_choice().index()] += 1;
        }

        // Uniform draw: each sign lands near 1000
        for count in counts {
            assert!((800..1200).contains(&count), "skewed draw: {:?}", counts);
        }
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let rng = GameRng::new(42);
        let mut ctx1 = rng.for_context("opponent");
        let mut ctx2 = rng.for_context("confetti");

        let seq1: Vec<_> = (0..10).map(|_| ctx1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| ctx2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_is_deterministic() {
        let mut ctx1 = GameRng::new(42).for_context("test");
        let mut ctx2 = GameRng::new(42).for_context("test");

        for _ in 0..10 {
            assert_eq!(ctx1.gen_range_usize(0..1000), ctx2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_context_seed_is_pinned() {
        // Saved seeds must replay the same cosmetic streams across releases
        assert_eq!(context_seed(42, "confetti"), 0xd409_b2aa_5a4d_9487);
        assert_eq!(context_seed(42, ""), 0x9e37_79b9_7f4a_7c3f);
        assert_eq!(GameRng::new(42).for_context("confetti").seed(), 0xd409_b2aa_5a4d_9487);
    }

    #[test]
    fn test_from_entropy_records_seed() {
        let rng = GameRng::from_entropy();
        let mut a = GameRng::new(rng.seed());
        let mut b = rng.clone();
        assert_eq!(a.draw_choice(), b.draw_choice());
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_tracks_draws() {
        let mut rng = GameRng::new(42);
        let start = rng.state();

        for _ in 0..100 {
            rng.draw_choice();
        }

        let state = rng.state();
        assert_eq!(state.seed, 42);
        assert!(state.word_pos > start.word_pos);
        assert_eq!(GameRng::new(42).state(), start);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
