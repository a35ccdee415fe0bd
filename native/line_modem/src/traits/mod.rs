//! Core traits for the link
//!
//! Each trait is one axis of a route: how bits become symbols, and how
//! symbols become (and are decided back from) signal levels.

mod keying;
mod line_code;

pub use keying::Keying;
pub use line_code::LineCode;
