//! BPSK keying (antipodal)
//!
//! +A → +1 (0°)
//! -A → -1 (180°)

use crate::traits::Keying;

/// Binary phase shift keying
#[derive(Debug, Clone, Copy, Default)]
pub struct Bpsk;

impl Keying for Bpsk {
    fn decide(&self, normalized: f64) -> i8 {
        if normalized >= 0.0 { 1 } else { -1 }
    }
}

pub fn demodulate_bpsk(signal: &[f64], amplitude: f64) -> Vec<i8> {
    Bpsk.demodulate(signal, amplitude)
}
