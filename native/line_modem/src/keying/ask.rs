//! ASK keying (three-level amplitude)
//!
//! Decision thresholds at ±0.5 of the amplitude, midway between the levels
//! {-1, 0, +1}. The levels are not equiprobable under AMI (0 carries every
//! zero bit) so this is not the ML boundary; it is kept as the reference rule.

use crate::traits::Keying;

/// Normalised decision threshold between level 0 and ±1
pub const ASK_THRESHOLD: f64 = 0.5;

/// Amplitude shift keying
#[derive(Debug, Clone, Copy, Default)]
pub struct Ask;

impl Keying for Ask {
    fn decide(&self, normalized: f64) -> i8 {
        if normalized > ASK_THRESHOLD {
            1
        } else if normalized < -ASK_THRESHOLD {
            -1
        } else {
            0
        }
    }
}

pub fn demodulate_ask(signal: &[f64], amplitude: f64) -> Vec<i8> {
    Ask.demodulate(signal, amplitude)
}
