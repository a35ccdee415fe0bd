//! Keying implementations
//!
//! Both schemes transmit symbol × amplitude; they differ only in the
//! receive-side decision rule.

mod ask;
mod bpsk;

pub use ask::{demodulate_ask, Ask, ASK_THRESHOLD};
pub use bpsk::{demodulate_bpsk, Bpsk};

/// Scale symbols by `amplitude` (shared by ASK and BPSK)
pub fn modulate(symbols: &[i8], amplitude: f64) -> Vec<f64> {
    symbols.iter().map(|&s| s as f64 * amplitude).collect()
}
