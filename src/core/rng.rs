//! Deterministic random number generation for targets, guesses and fallbacks.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Hand each participant its own branch of the session seed
//! - **Context streams**: Independent sequences for different purposes
//!
//! ## Usage
//!
//! ```
//! use guess_duel::core::{Bounds, GameRng};
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for the automated participant
//! let mut computer = rng.fork();
//!
//! let pick = computer.pick(Bounds::new(0, 100));
//! assert!((0..=100).contains(&pick));
//!
//! // Forks are deterministic - same fork counter = same sequence
//! let mut rng2 = GameRng::new(42);
//! let mut computer2 = rng2.fork();
//! assert_eq!(computer2.pick(Bounds::new(0, 100)), pick);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

use super::Bounds;

/// Deterministic RNG shared by every source of randomness in a session.
///
/// Uses ChaCha8 so a seed reproduces a whole game on any platform.
#[derive(Clone, Debug)]
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

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
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
        Self::new(fork_seed)
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// so e.g. target selection does not shift when guesses are drawn.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Pick a value uniformly from the inclusive range of `bounds`.
    ///
    /// Inverted bounds have no members; the low end is returned unchanged.
    pub fn pick(&mut self, bounds: Bounds) -> i64 {
        if bounds.is_empty() {
            return bounds.low;
        }
        self.inner.gen_range(bounds.low..=bounds.high)
    }
}
