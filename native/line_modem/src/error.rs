//! Link error types

use thiserror::Error;

/// Result type for link operations
pub type LinkResult<T> = Result<T, LinkError>;

/// Errors that abort a link run before any signal is produced
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkError {
    /// Modulation selector is not one of the supported routes
    #[error("invalid modulation '{0}' (expected ASK or BPSK)")]
    InvalidModulation(String),

    /// Numeric input outside its domain
    #[error("invalid {name} {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Character does not fit in one 8-bit code unit
    #[error("cannot encode {ch:?} (U+{code:04X}) at position {position}: outside 8-bit range")]
    Encoding { ch: char, code: u32, position: usize },
}

impl LinkError {
    pub(crate) fn encoding(ch: char, position: usize) -> Self {
        LinkError::Encoding {
            ch,
            code: ch as u32,
            position,
        }
    }
}
