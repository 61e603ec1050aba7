//! Reward draws for successful check-ins.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

/// Smallest possible reward for one check-in.
pub const MIN_REWARD: u32 = 100;

/// Largest possible reward for one check-in.
pub const MAX_REWARD: u32 = 300;

/// Draws the reward points granted by one check-in: a multiple of 10,
/// uniform over `[MIN_REWARD, MAX_REWARD]` inclusive.
pub struct RewardGenerator {
    rng: Mcg128Xsl64,
}

impl RewardGenerator {
    /// Entropy-seeded generator for production use.
    pub fn new() -> Self {
        Self {
            rng: Mcg128Xsl64::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mcg128Xsl64::seed_from_u64(seed),
        }
    }

    /// One reward draw: uniform integer in [10, 30], times 10.
    pub fn draw(&mut self) -> u32 {
        self.rng.gen_range(10..=30) * 10
    }
}

impl Default for RewardGenerator {
    fn default() -> Self {
        Self::new()
    }
}
