//! Random index sources.
//!
//! Everything that needs randomness goes through [`RandomSource`], so the
//! generators can be driven by the host generator in production and by a
//! scripted sequence in tests. Neither source is suitable for secrets that
//! need a cryptographic guarantee.

use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform index in `[0, upper)`. `upper` must be non-zero.
    fn index(&mut self, upper: usize) -> usize;

    /// Fisher-Yates shuffle driven by [`RandomSource::index`], so scripted
    /// sources shuffle predictably.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}

/// Adapter over any `rand` generator.
#[derive(Debug)]
pub struct RngSource<R: Rng>(R);

impl RngSource<ThreadRng> {
    pub fn host() -> Self {
        RngSource(rand::rng())
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn index(&mut self, upper: usize) -> usize {
        self.0.random_range(0..upper)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.0);
    }
}

/// Replays a fixed list of values, wrapping around when exhausted.
///
/// Each value is reduced modulo the requested bound, so a script of
/// `[0, 1, 2, 42]` yields exactly those indices as long as the bounds allow.
/// An empty script always yields 0.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<usize>,
    pos: usize,
}

impl FixedSequence {
    pub fn new(values: Vec<usize>) -> Self {
        FixedSequence { values, pos: 0 }
    }
}

impl RandomSource for FixedSequence {
    fn index(&mut self, upper: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value % upper
    }
}
