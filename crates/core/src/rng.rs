//! RNG module - seeded randomness for board generation and refills
//!
//! Every random decision the engine makes (initial rolls, refills, shuffles,
//! obstacle placement) goes through [`GameRng`], so a session started from the
//! same seed replays identically.

use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};

/// Seeded random source owned by a session
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread RNG (used when no seed is configured)
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `[0, max)`
    pub fn next_below(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.rng.random_range(0..max)
    }

    /// Seed for a follow-up session (restarts draw from the first session's RNG)
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }

    /// Shuffle a slice uniformly
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.rng);
    }

    /// Pick `amount` distinct indices from `0..len`, clamped to `len`
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, len, amount.min(len)).into_vec()
    }
}
