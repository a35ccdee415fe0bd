//! Gaussian noise sources
//!
//! Uses Box-Muller transform for Gaussian samples. The channel only ever asks
//! for unit-variance draws and scales them itself, so a source can be swapped
//! for [`Silence`] to get a noiseless, bit-exact channel.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

/// Source of standard normal samples (mean 0, variance 1)
pub trait NoiseSource: Send {
    /// Draw the next N(0, 1) sample
    fn next_standard_normal(&mut self) -> f64;
}

/// Seedable AWGN generator
pub struct NoiseGenerator {
    /// Internal RNG
    rng: ChaCha8Rng,

    /// Cached second sample from Box-Muller
    cached: Option<f64>,
}

impl NoiseGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            cached: None,
        }
    }

    /// Child generator with a seed drawn from `seed_rng`.
    ///
    /// Used to hand each independent run its own stream while keeping the
    /// whole batch reproducible from one master seed.
    pub fn derive(seed_rng: &mut ChaCha8Rng) -> Self {
        let seed: u64 = seed_rng.gen();
        Self::from_seed(seed)
    }
}

impl NoiseSource for NoiseGenerator {
    fn next_standard_normal(&mut self) -> f64 {
        if let Some(cached) = self.cached.take() {
            return cached;
        }

        let u1: f64 = self.rng.gen();
        let u2: f64 = self.rng.gen();

        // Avoid log(0)
        let u1 = u1.max(1e-10);

        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;

        self.cached = Some(r * theta.sin());

        r * theta.cos()
    }
}

/// Noise source that never adds anything
#[derive(Debug, Clone, Copy, Default)]
pub struct Silence;

impl NoiseSource for Silence {
    fn next_standard_normal(&mut self) -> f64 {
        0.0
    }
}
