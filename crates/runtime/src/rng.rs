//! Production random source for the tick worker.

use arena_core::RngOracle;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// [`RngOracle`] backed by `rand`'s seedable standard generator.
///
/// When a seed is provided the same seed always replays the same match;
/// without one the generator is seeded from OS entropy.
#[derive(Debug, Clone)]
pub struct StdRngOracle {
    rng: StdRng,
    seed: Option<u64>,
}

impl StdRngOracle {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seeded when `seed` is present, entropy-seeded otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    /// The seed this generator was created from, if deterministic.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RngOracle for StdRngOracle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }
}
