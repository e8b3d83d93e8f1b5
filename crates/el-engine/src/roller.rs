//! Entropy for the engine.
//!
//! Every random draw goes through [`Roller`], so the rules never hold an RNG
//! directly. Live play uses [`RngRoller::from_entropy`]; there is no seed
//! option.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::rngs::ThreadRng;

/// A source of uniform random draws.
pub trait Roller {
    /// Pick an index uniformly from `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Draw an integer uniformly from a non-empty inclusive range.
    fn roll(&mut self, range: RangeInclusive<i64>) -> i64;
}

/// A [`Roller`] backed by any `rand` generator.
#[derive(Debug)]
pub struct RngRoller<R> {
    rng: R,
}

impl RngRoller<ThreadRng> {
    /// Roller seeded from the operating system's entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> RngRoller<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Roller for RngRoller<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn roll(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.rng.random_range(range)
    }
}
