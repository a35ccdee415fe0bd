//! Channel physics for the baseband link simulator
//!
//! Additive white Gaussian noise at a requested SNR, with the randomness
//! injected through [`NoiseSource`] so a run can be seeded, derived from a
//! master seed, or made noiseless.

pub mod awgn;
pub mod math;
pub mod noise;

pub use awgn::{apply_noise, AwgnChannel, NoiseBudget};
pub use noise::{NoiseGenerator, NoiseSource, Silence};
