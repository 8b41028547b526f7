//! Seedable randomness for the display-order shuffle.
//!
//! The only randomness in the engine is the unbiased permutation the
//! loader applies to the flattened card list. The source is injected,
//! never ambient:
//!
//! - **Tests** construct `ShuffleRng::new(seed)` and get the exact same
//!   permutation every run.
//! - **Production** uses `ShuffleRng::from_entropy()` (also the
//!   `Default`), so every load yields a fresh ordering.
//!
//! ## Example
//!
//! ```
//! use pilesort::ShuffleRng;
//!
//! let mut a = ShuffleRng::new(42);
//! let mut b = ShuffleRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Injectable shuffle source.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness, and
/// so that a seed fully determines the permutation.
#[derive(Clone, Debug)]
pub struct ShuffleRng {
    inner: ChaCha8Rng,
}

impl ShuffleRng {
    /// Create a deterministic RNG from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system's entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Shuffle a slice in place with an unbiased Fisher-Yates pass.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

impl Default for ShuffleRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
