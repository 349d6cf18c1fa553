//! Concrete random sources.
//!
//! - [`ThreadRandom`]: the default, backed by `rand`'s thread-local generator
//! - [`SeededRandom`]: a reproducible PCG stream for replayable chaos runs

use fickle_core::RandomSource;
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::sync::{Mutex, PoisonError};

/// Draws from the calling thread's generator.
///
/// Each thread owns its own generator, so concurrent dispatches never
/// contend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// A deterministic stream: the same seed yields the same draws.
///
/// The generator sits behind a mutex so a seeded dispatcher can still be
/// shared across threads, at the cost of serializing draws.
#[derive(Debug)]
pub struct SeededRandom {
    seed: u64,
    inner: Mutex<Pcg64Mcg>,
}

impl SeededRandom {
    /// Create a stream from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Mutex::new(Pcg64Mcg::seed_from_u64(seed)),
        }
    }

    /// The seed this stream was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&self) -> f64 {
        let bits = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_u64();
        // Top 53 bits give every representable value in [0, 1) equal spacing.
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}
