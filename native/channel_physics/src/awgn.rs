//! Additive white Gaussian noise channel
//!
//! Noise power is set relative to the measured mean power of the block being
//! transmitted, so the same SNR gives the same degradation whatever the
//! transmit amplitude:
//!
//! - P = mean(x²) over the block
//! - N = P / 10^(SNR/10), or 0 when the linear ratio is not positive
//! - y = x + σ·n with σ = √N and n ~ N(0, 1)
//!
//! σ is worked out from the block scaled to unit peak and then scaled back,
//! so it stays finite and non-zero for any finite non-zero amplitude.

use crate::math::{db_to_power_ratio, normalized_power};
use crate::noise::NoiseSource;

/// Power figures for one block, kept for telemetry
///
/// `signal_power` and `noise_power` may saturate to inf or 0 at extreme
/// amplitudes; `sigma` does not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseBudget {
    pub signal_power: f64,
    pub noise_power: f64,
    pub sigma: f64,
}

/// AWGN channel at a fixed SNR
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AwgnChannel {
    snr_db: f64,
}

impl AwgnChannel {
    pub fn new(snr_db: f64) -> Self {
        Self { snr_db }
    }

    /// Compute signal power, noise power and σ for a block
    pub fn budget(&self, signal: &[f64]) -> NoiseBudget {
        let (peak, normalized) = normalized_power(signal);
        let snr_linear = db_to_power_ratio(self.snr_db);

        // -inf dB collapses to 0 here; treat it as "no noise" rather than
        // dividing by zero
        let sigma = if snr_linear > 0.0 {
            peak * (normalized / snr_linear).sqrt()
        } else {
            0.0
        };

        NoiseBudget {
            signal_power: peak * peak * normalized,
            noise_power: sigma * sigma,
            sigma,
        }
    }

    /// Return a noisy copy of `signal`, one draw from `noise` per sample
    pub fn apply<N>(&self, signal: &[f64], noise: &mut N) -> Vec<f64>
    where
        N: NoiseSource + ?Sized,
    {
        let budget = self.budget(signal);

        tracing::trace!(
            snr_db = self.snr_db,
            signal_power = budget.signal_power,
            noise_power = budget.noise_power,
            sigma = budget.sigma,
            samples = signal.len(),
            "awgn block"
        );

        signal
            .iter()
            .map(|&x| x + budget.sigma * noise.next_standard_normal())
            .collect()
    }
}

/// Add AWGN to `signal` at `snr_db`
pub fn apply_noise<N>(signal: &[f64], snr_db: f64, noise: &mut N) -> Vec<f64>
where
    N: NoiseSource + ?Sized,
{
    AwgnChannel::new(snr_db).apply(signal, noise)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{NoiseGenerator, Silence};

    fn polar_block(n: usize, amplitude: f64) -> Vec<f64> {
        (0..n)
            .map(|i| if i % 3 == 0 { -amplitude } else { amplitude })
            .collect()
    }

    fn measure_noise_variance(clean: &[f64], noisy: &[f64]) -> f64 {
        let n = clean.len() as f64;
        clean
            .iter()
            .zip(noisy)
            .map(|(c, y)| (y - c).powi(2))
            .sum::<f64>()
            / n
    }

    #[test]
    fn test_silence_leaves_signal_untouched() {
        let signal = vec![1.0, 0.0, -1.0, 1.0, 0.0];
        let noisy = apply_noise(&signal, 3.0, &mut Silence);
        assert_eq!(noisy, signal);
    }

    #[test]
    fn test_output_length_matches_input() {
        let mut noise = NoiseGenerator::from_seed(1);
        let signal = polar_block(123, 2.0);
        assert_eq!(apply_noise(&signal, 10.0, &mut noise).len(), 123);
    }

    #[test]
    fn test_empty_signal() {
        let mut noise = NoiseGenerator::from_seed(1);
        assert!(apply_noise(&[], 10.0, &mut noise).is_empty());

        let budget = AwgnChannel::new(10.0).budget(&[]);
        assert_eq!(budget.signal_power, 0.0);
        assert_eq!(budget.sigma, 0.0);
    }

    #[test]
    fn test_all_zero_signal_gets_no_noise() {
        let mut noise = NoiseGenerator::from_seed(5);
        let signal = vec![0.0; 64];
        assert_eq!(apply_noise(&signal, 0.0, &mut noise), signal);
    }

    #[test]
    fn test_negative_infinite_snr_means_no_noise() {
        let channel = AwgnChannel::new(f64::NEG_INFINITY);
        let signal = polar_block(32, 1.0);

        assert_eq!(channel.budget(&signal).noise_power, 0.0);

        let mut noise = NoiseGenerator::from_seed(5);
        assert_eq!(channel.apply(&signal, &mut noise), signal);
    }

    #[test]
    fn test_budget_matches_snr() {
        let signal = polar_block(300, 2.0);
        let budget = AwgnChannel::new(10.0).budget(&signal);

        assert!((budget.signal_power - 4.0).abs() < 1e-12);
        assert!((budget.noise_power - 0.4).abs() < 1e-12);
        assert!((budget.sigma - 0.4_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_measured_noise_power_tracks_snr() {
        for &snr_db in &[0.0, 6.0, 12.0] {
            let mut noise = NoiseGenerator::from_seed(42);
            let signal = polar_block(50_000, 1.0);
            let noisy = apply_noise(&signal, snr_db, &mut noise);

            let expected = 1.0 / db_to_power_ratio(snr_db);
            let measured = measure_noise_variance(&signal, &noisy);

            assert!(
                (measured - expected).abs() / expected < 0.05,
                "SNR {} dB: expected noise power {}, measured {}",
                snr_db, expected, measured
            );
        }
    }

    #[test]
    fn test_noise_scales_with_amplitude() {
        // Same seed, same SNR: the noise realisation scales with the signal
        let small = polar_block(256, 1.0);
        let large = polar_block(256, 3.0);

        let noisy_small = apply_noise(&small, 5.0, &mut NoiseGenerator::from_seed(11));
        let noisy_large = apply_noise(&large, 5.0, &mut NoiseGenerator::from_seed(11));

        for (s, l) in noisy_small.iter().zip(&noisy_large) {
            assert!((s * 3.0 - l).abs() < 1e-9);
        }
    }

    #[test]
    fn test_huge_amplitude_with_silence_is_untouched() {
        // 1e160² overflows f64
        let signal = polar_block(48, 1e160);
        let budget = AwgnChannel::new(10.0).budget(&signal);
        assert!(budget.sigma.is_finite());

        let noisy = apply_noise(&signal, 10.0, &mut Silence);
        assert_eq!(noisy, signal);
    }

    #[test]
    fn test_noise_relative_to_power_at_extreme_amplitudes() {
        for &amplitude in &[1e160, 1e-200] {
            let signal = polar_block(50_000, amplitude);
            let noisy = apply_noise(&signal, 0.0, &mut NoiseGenerator::from_seed(42));

            // Compare in units of the amplitude so the squares stay representable
            let unit: Vec<f64> = signal.iter().map(|x| x / amplitude).collect();
            let unit_noisy: Vec<f64> = noisy.iter().map(|y| y / amplitude).collect();
            let measured = measure_noise_variance(&unit, &unit_noisy);

            assert!(
                (measured - 1.0).abs() < 0.05,
                "amplitude {}: relative noise power {}",
                amplitude, measured
            );
        }
    }

    #[test]
    fn test_tiny_amplitude_budget_not_flushed() {
        // 1e-200² underflows to 0
        let signal = polar_block(300, 1e-200);
        let budget = AwgnChannel::new(10.0).budget(&signal);
        assert!((budget.sigma / 1e-200 - 0.1_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_seeded_channel_is_reproducible() {
        let signal = polar_block(64, 1.0);
        let a = apply_noise(&signal, 3.0, &mut NoiseGenerator::from_seed(99));
        let b = apply_noise(&signal, 3.0, &mut NoiseGenerator::from_seed(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_trait_object_source() {
        let mut boxed: Box<dyn NoiseSource> = Box::new(Silence);
        let signal = vec![0.5, -0.5];
        assert_eq!(apply_noise(&signal, 0.0, boxed.as_mut()), signal);
    }
}
