//! Link configuration

use std::fmt;
use std::str::FromStr;

use crate::error::{LinkError, LinkResult};

/// Modulation selector
///
/// Each variant names a fixed route:
/// - `Ask`  → AMI line code + ASK
/// - `Bpsk` → NRZ line code + BPSK
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modulation {
    #[default]
    Ask,
    Bpsk,
}

impl Modulation {
    pub const ALL: [Modulation; 2] = [Modulation::Ask, Modulation::Bpsk];

    pub fn as_str(self) -> &'static str {
        match self {
            Modulation::Ask => "ASK",
            Modulation::Bpsk => "BPSK",
        }
    }

    /// Line code and keying, for labels
    pub fn route_name(self) -> &'static str {
        match self {
            Modulation::Ask => "AMI + ASK",
            Modulation::Bpsk => "NRZ + BPSK",
        }
    }
}

impl fmt::Display for Modulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modulation {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ask") {
            Ok(Modulation::Ask)
        } else if s.eq_ignore_ascii_case("bpsk") {
            Ok(Modulation::Bpsk)
        } else {
            Err(LinkError::InvalidModulation(s.to_string()))
        }
    }
}

/// Parameters for one link run
///
/// Holds no state between runs; the same config can drive any number of
/// independent transmissions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkConfig {
    /// Transmit amplitude in volts, must be > 0
    pub amplitude: f64,
    /// Channel SNR in dB
    pub snr_db: f64,
    pub modulation: Modulation,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            snr_db: 15.0,
            modulation: Modulation::Ask,
        }
    }
}

impl LinkConfig {
    pub fn new(amplitude: f64, snr_db: f64, modulation: Modulation) -> Self {
        Self {
            amplitude,
            snr_db,
            modulation,
        }
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_snr_db(mut self, snr_db: f64) -> Self {
        self.snr_db = snr_db;
        self
    }

    pub fn with_modulation(mut self, modulation: Modulation) -> Self {
        self.modulation = modulation;
        self
    }

    /// Reject values that would invert or collapse the constellation
    pub fn validate(&self) -> LinkResult<()> {
        if !(self.amplitude.is_finite() && self.amplitude > 0.0) {
            return Err(LinkError::InvalidParameter {
                name: "amplitude",
                value: self.amplitude,
                reason: "must be positive and finite",
            });
        }

        if self.snr_db.is_nan() {
            return Err(LinkError::InvalidParameter {
                name: "snr_db",
                value: self.snr_db,
                reason: "must be a number",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulation_parse() {
        assert_eq!("ASK".parse::<Modulation>().unwrap(), Modulation::Ask);
        assert_eq!("bpsk".parse::<Modulation>().unwrap(), Modulation::Bpsk);
        assert_eq!("Bpsk".parse::<Modulation>().unwrap(), Modulation::Bpsk);
    }

    #[test]
    fn test_modulation_parse_rejects_unknown() {
        assert_eq!(
            "QAM16".parse::<Modulation>(),
            Err(LinkError::InvalidModulation("QAM16".to_string()))
        );
        assert!(" ASK".parse::<Modulation>().is_err());
        assert!("".parse::<Modulation>().is_err());
    }

    #[test]
    fn test_modulation_display_roundtrip() {
        for m in Modulation::ALL {
            assert_eq!(m.to_string().parse::<Modulation>().unwrap(), m);
        }
        assert_eq!(Modulation::Ask.route_name(), "AMI + ASK");
        assert_eq!(Modulation::Bpsk.route_name(), "NRZ + BPSK");
    }

    #[test]
    fn test_default_config() {
        let config = LinkConfig::default();
        assert_eq!(config.amplitude, 1.0);
        assert_eq!(config.snr_db, 15.0);
        assert_eq!(config.modulation, Modulation::Ask);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = LinkConfig::default()
            .with_amplitude(2.0)
            .with_snr_db(-3.0)
            .with_modulation(Modulation::Bpsk);
        assert_eq!(config, LinkConfig::new(2.0, -3.0, Modulation::Bpsk));
    }

    #[test]
    fn test_validate_amplitude() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = LinkConfig::default().with_amplitude(bad).validate().unwrap_err();
            assert!(
                matches!(err, LinkError::InvalidParameter { name: "amplitude", .. }),
                "amplitude {} should be rejected, got {:?}",
                bad, err
            );
        }
    }

    #[test]
    fn test_validate_snr() {
        assert!(LinkConfig::default().with_snr_db(f64::NAN).validate().is_err());
        assert!(LinkConfig::default().with_snr_db(-40.0).validate().is_ok());
        assert!(LinkConfig::default().with_snr_db(f64::INFINITY).validate().is_ok());
    }
}
