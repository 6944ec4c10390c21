//! Deterministic random number generation for deck building and insertion.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical decks and insertions
//! - **Forkable**: Create independent branches for simulation batches
//! - **Serializable**: O(1) state capture and restore
//!
//! Every random decision the rules engine makes goes through a `GameRng`,
//! so a game is fully reproducible from its seed plus its command history.
//!
//! ```
//! use climate_cards::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut pool = vec!["a", "b", "c"];
//!
//! // Remove a uniformly random element
//! let picked = rng.extract(&mut pool).unwrap();
//! assert_eq!(pool.len(), 2);
//! assert!(!pool.contains(&picked));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG with forking for simulations.
///
/// Uses ChaCha8 for speed while keeping a portable, reproducible stream.
/// Serializes as its `GameRngState`, so a saved game resumes the exact
/// stream it was using.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "GameRngState", into = "GameRngState")]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    ///
    /// An empty range yields its start instead of panicking.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        if range.is_empty() {
            return range.start;
        }
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Remove and return a uniformly random element of `pool`.
    ///
    /// Repeated extraction until the pool is empty yields a uniform random
    /// permutation; decks are built this way rather than by shuffling.
    pub fn extract<T>(&mut self, pool: &mut Vec<T>) -> Option<T> {
        if pool.is_empty() {
            return None;
        }
        let index = self.inner.gen_range(0..pool.len());
        Some(pool.remove(index))
    }

    /// Pick an insertion index for a sequence of `len` elements.
    ///
    /// Drawn from `[0, len)`; an empty sequence always inserts at 0.
    pub fn insertion_index(&mut self, len: usize) -> usize {
        self.gen_range_usize(0..len)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
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
            fork_counter: state.fork_counter,
        }
    }
}

impl From<GameRngState> for GameRng {
    fn from(state: GameRngState) -> Self {
        Self::from_state(&state)
    }
}

impl From<GameRng> for GameRngState {
    fn from(rng: GameRng) -> Self {
        rng.state()
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
