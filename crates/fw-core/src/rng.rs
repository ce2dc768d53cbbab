//! Deterministic simulation RNG.
//!
//! The simulated telemetry feed is the only consumer of randomness.  A single
//! seeded `SmallRng` drives it, so a given seed always replays the same
//! positions and speeds.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Owned by exactly one telemetry source.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Symmetric jitter in `[-span / 2, span / 2)`.  Zero when `span <= 0`.
    #[inline]
    pub fn jitter(&mut self, span: f64) -> f64 {
        if span <= 0.0 {
            return 0.0;
        }
        (self.random::<f64>() - 0.5) * span
    }
}
