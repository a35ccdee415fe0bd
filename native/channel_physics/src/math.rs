//! Small power/dB helpers

/// Convert a power ratio in dB to linear scale
#[inline]
pub fn db_to_power_ratio(db: f64) -> f64 {
    10.0_f64.powf(db / 10.0)
}

/// Peak magnitude of a signal and the mean power of `signal / peak`
///
/// Mean power is `peak² · normalized`. Squaring the normalised samples keeps
/// every term in [0, 1], so the power of very large or very small signals
/// neither overflows nor flushes to zero. Returns `(0.0, 0.0)` for an empty
/// or all-zero signal.
pub fn normalized_power(signal: &[f64]) -> (f64, f64) {
    let peak = signal.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
    if peak == 0.0 {
        return (0.0, 0.0);
    }

    let normalized = signal
        .iter()
        .map(|x| {
            let u = x / peak;
            u * u
        })
        .sum::<f64>()
        / signal.len() as f64;

    (peak, normalized)
}
