//! Bit error rate

/// Count positions that differ over the common prefix
pub fn count_bit_errors(original: &[u8], recovered: &[u8]) -> usize {
    original
        .iter()
        .zip(recovered)
        .filter(|(a, b)| a != b)
        .count()
}

/// Bit error rate of `recovered` against `original`
///
/// Compares only the overlapping prefix but always divides by the original
/// length. Empty original gives 0.0.
pub fn ber(original: &[u8], recovered: &[u8]) -> f64 {
    if original.is_empty() {
        return 0.0;
    }

    if original.len() != recovered.len() {
        tracing::warn!(
            original = original.len(),
            recovered = recovered.len(),
            "bit sequences differ in length, comparing common prefix"
        );
    }

    count_bit_errors(original, recovered) as f64 / original.len() as f64
}
