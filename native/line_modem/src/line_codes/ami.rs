//! AMI line code (Alternate Mark Inversion)
//!
//! Bit 0 → 0
//! Bit 1 → +1, -1, +1, ... alternating over the 1-bits only

use crate::traits::LineCode;

/// Alternate Mark Inversion line code
#[derive(Debug, Clone, Copy, Default)]
pub struct Ami;

pub fn encode_ami(bits: &[u8]) -> Vec<i8> {
    let mut marks = 0usize;

    bits.iter()
        .map(|&bit| {
            if bit == 0 {
                0
            } else {
                let sym = if marks % 2 == 0 { 1 } else { -1 };
                marks += 1;
                sym
            }
        })
        .collect()
}

/// Any nonzero level is a mark; polarity is dropped.
pub fn decode_ami(symbols: &[i8]) -> Vec<u8> {
    symbols.iter().map(|&s| u8::from(s != 0)).collect()
}

impl LineCode for Ami {
    fn levels(&self) -> &'static [i8] {
        &[-1, 0, 1]
    }

    fn encode(&self, bits: &[u8]) -> Vec<i8> {
        encode_ami(bits)
    }

    fn decode(&self, symbols: &[i8]) -> Vec<u8> {
        decode_ami(symbols)
    }
}
