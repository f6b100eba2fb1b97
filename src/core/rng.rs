//! Deterministic random number generation for role and word draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical assignments
//! - **Replayable**: O(1) state capture and restore
//! - **Interactive**: `from_entropy` for real tables
//!
//! ```
//! use undercover::core::GameRng;
//!
//! let mut rng1 = GameRng::new(7);
//! let mut rng2 = GameRng::new(7);
//!
//! assert_eq!(rng1.gen_range_usize(0..10), rng2.gen_range_usize(0..10));
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used by the game starter.
///
/// Uses ChaCha8 for speed while keeping the draws uniform and reproducible
/// from the seed alone.
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

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is kept so the session can still be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    ///
    /// Panics if the range is empty.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for replaying a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
