//! Level assignment for newly inserted nodes.
//!
//! A node lands on level `k` with probability `2^-(k+1)`: flip a fair coin
//! until it comes up tails and count the heads. Level 0 holds every node,
//! and each level above it holds roughly half of the one below.
//!
//! The draw is not tied to the list's size. It is only clamped, at
//! [`MAX_LEVEL`] or lower, so that a run of heads cannot grow the head
//! sentinel without bound.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Hard ceiling on any node's level, matching the width of a 64-bit draw.
pub const MAX_LEVEL: usize = 63;

/// Source of levels for new nodes.
pub trait LevelGenerator {
    /// Returns the level for the next inserted node, in `0..=self.max_level()`.
    fn next_level(&mut self) -> usize;

    /// Highest level this generator may return.
    fn max_level(&self) -> usize;
}

/// Geometric(0.5) level generator backed by a `rand` RNG.
#[derive(Debug, Clone)]
pub struct GeometricLevelGenerator<R = SmallRng> {
    max_level: usize,
    rng: R,
}

impl GeometricLevelGenerator<SmallRng> {
    pub fn new(max_level: usize) -> Self {
        Self::with_rng(max_level, SmallRng::from_entropy())
    }

    pub fn seeded(max_level: usize, seed: u64) -> Self {
        Self::with_rng(max_level, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GeometricLevelGenerator<R> {
    pub fn with_rng(max_level: usize, rng: R) -> Self {
        GeometricLevelGenerator {
            max_level: max_level.min(MAX_LEVEL),
            rng,
        }
    }
}

impl Default for GeometricLevelGenerator<SmallRng> {
    fn default() -> Self {
        Self::new(MAX_LEVEL)
    }
}

impl<R: Rng> LevelGenerator for GeometricLevelGenerator<R> {
    fn next_level(&mut self) -> usize {
        let mut level = 0;
        while level < self.max_level && self.rng.gen_bool(0.5) {
            level += 1;
        }
        level
    }

    fn max_level(&self) -> usize {
        self.max_level
    }
}
