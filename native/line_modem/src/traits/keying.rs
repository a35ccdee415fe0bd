//! Keying trait - symbol ↔ signal level mapping
//!
//! Transmit side scales each symbol by the amplitude; receive side normalises
//! by the same amplitude and makes a hard decision per sample.

/// Baseband keying trait
///
/// Implementations only define the per-sample decision; modulation and block
/// demodulation are shared.
pub trait Keying: Send + Sync {
    /// Hard decision on one amplitude-normalised sample
    fn decide(&self, normalized: f64) -> i8;

    /// Map symbols to samples (symbol × amplitude)
    fn modulate(&self, symbols: &[i8], amplitude: f64) -> Vec<f64> {
        crate::keying::modulate(symbols, amplitude)
    }

    /// Normalise each sample by `amplitude` and decide its symbol
    fn demodulate(&self, signal: &[f64], amplitude: f64) -> Vec<i8> {
        signal.iter().map(|&x| self.decide(x / amplitude)).collect()
    }
}
