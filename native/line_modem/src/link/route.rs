//! Route - a line code paired with a keying
//!
//! Composes the two traits so the pipeline can run either route without
//! branching per stage.

use crate::traits::{Keying, LineCode};

/// Transmit/receive chain for one modulation
#[derive(Debug, Clone, Copy, Default)]
pub struct Route<L, K>
where
    L: LineCode,
    K: Keying,
{
    line_code: L,
    keying: K,
}

impl<L, K> Route<L, K>
where
    L: LineCode,
    K: Keying,
{
    pub fn new(line_code: L, keying: K) -> Self {
        Self { line_code, keying }
    }

    /// Bits → symbols
    pub fn encode(&self, bits: &[u8]) -> Vec<i8> {
        self.line_code.encode(bits)
    }

    /// Symbols → transmitted signal
    pub fn modulate(&self, symbols: &[i8], amplitude: f64) -> Vec<f64> {
        self.keying.modulate(symbols, amplitude)
    }

    /// Received signal → recovered symbols
    pub fn detect(&self, received: &[f64], amplitude: f64) -> Vec<i8> {
        self.keying.demodulate(received, amplitude)
    }

    /// Recovered symbols → recovered bits
    pub fn decode(&self, symbols: &[i8]) -> Vec<u8> {
        self.line_code.decode(symbols)
    }

    pub fn line_code(&self) -> &L {
        &self.line_code
    }
}
