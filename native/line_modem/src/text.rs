//! Text ⇄ bit conversion
//!
//! Eight bits per character, most significant bit first. Characters map to
//! their code point, so only U+0000..=U+00FF (ASCII plus Latin-1) can be sent.
//! Decoding maps each byte back to the same code point.

use crate::error::{LinkError, LinkResult};

/// Bits per character
pub const BITS_PER_CHAR: usize = 8;

/// Convert text to a bit sequence (one `u8` of 0/1 per bit)
pub fn encode(text: &str) -> LinkResult<Vec<u8>> {
    let mut bits = Vec::with_capacity(text.len() * BITS_PER_CHAR);

    for (position, ch) in text.chars().enumerate() {
        let byte = u8::try_from(u32::from(ch)).map_err(|_| LinkError::encoding(ch, position))?;
        bits.extend((0..BITS_PER_CHAR).rev().map(|shift| (byte >> shift) & 1));
    }

    Ok(bits)
}

/// Convert a bit sequence back to text
///
/// A trailing group shorter than 8 bits is dropped.
pub fn decode(bits: &[u8]) -> String {
    let chunks = bits.chunks_exact(BITS_PER_CHAR);

    let tail = chunks.remainder().len();
    if tail != 0 {
        tracing::debug!(bits = bits.len(), dropped = tail, "dropping partial trailing byte");
    }

    chunks
        .map(|group| {
            let byte = group
                .iter()
                .fold(0u8, |acc, &bit| (acc << 1) | (bit & 1));
            char::from(byte)
        })
        .collect()
}
