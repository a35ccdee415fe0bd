//! NRZ-L line code (polar)
//!
//! Bit 0 → -1
//! Bit 1 → +1

use crate::traits::LineCode;

/// Polar non-return-to-zero line code
#[derive(Debug, Clone, Copy, Default)]
pub struct Nrz;

pub fn encode_nrz(bits: &[u8]) -> Vec<i8> {
    bits.iter().map(|&bit| if bit == 0 { -1 } else { 1 }).collect()
}

/// Symbol 0 never leaves the transmitter but decodes as 1 (boundary is ≥ 0).
pub fn decode_nrz(symbols: &[i8]) -> Vec<u8> {
    symbols.iter().map(|&s| u8::from(s >= 0)).collect()
}

impl LineCode for Nrz {
    fn levels(&self) -> &'static [i8] {
        &[-1, 1]
    }

    fn encode(&self, bits: &[u8]) -> Vec<i8> {
        encode_nrz(bits)
    }

    fn decode(&self, symbols: &[i8]) -> Vec<u8> {
        decode_nrz(symbols)
    }
}
