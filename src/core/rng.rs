//! Deterministic random number generation for shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: same seed produces an identical sequence, so
//!   shuffle outcomes are reproducible in tests
//! - **Uniform shuffles**: Fisher-Yates over the whole slice, each of the
//!   `n!` permutations equally likely, linear time
//!
//! ## Usage
//!
//! ```
//! use playfield::core::TableRng;
//!
//! let mut rng = TableRng::new(42);
//! let mut cards = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut cards);
//!
//! // Same seed, same permutation.
//! let mut rng2 = TableRng::new(42);
//! let mut cards2 = vec![1, 2, 3, 4, 5];
//! rng2.shuffle(&mut cards2);
//! assert_eq!(cards, cards2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for pile shuffles.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Sessions that do not care about reproducibility can seed
/// from entropy with [`TableRng::from_entropy`].
#[derive(Clone, Debug)]
pub struct TableRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl TableRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
