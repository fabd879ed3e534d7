// src/services/random.rs
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random values interpolated into replies.
///
/// Implementations must return a value in `low..=high`.
pub trait RandomSource {
    fn between(&mut self, low: u32, high: u32) -> u32;

    /// Index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        let last = u32::try_from(len.saturating_sub(1)).unwrap_or(u32::MAX);
        self.between(0, last) as usize
    }
}

/// Thread-local generator. Each worker thread owns its own state,
/// so concurrent requests never contend on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn between(&mut self, low: u32, high: u32) -> u32 {
        rand::rng().random_range(low..=high)
    }
}

/// Reproducible generator for tooling and tests.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    inner: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { inner: StdRng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededRandom {
    fn between(&mut self, low: u32, high: u32) -> u32 {
        self.inner.random_range(low..=high)
    }
}
