//! Line Modem - baseband link simulator
//!
//! Text is sent as 8-bit characters over one of two routes:
//! - AMI line code + ASK keying
//! - NRZ line code + BPSK keying
//!
//! through an AWGN channel (see `channel_physics`), then decided, decoded and
//! scored by bit error rate. Everything here is a pure transform except the
//! injected noise source.

pub mod ber;
pub mod error;
pub mod keying;
pub mod line_codes;
pub mod link;
pub mod nif;
pub mod text;
pub mod traits;

// Re-export core types for convenience
pub use ber::ber;
pub use error::{LinkError, LinkResult};
pub use keying::{demodulate_ask, demodulate_bpsk, modulate, Ask, Bpsk};
pub use line_codes::{decode_ami, decode_nrz, encode_ami, encode_nrz, Ami, Nrz};
pub use link::{LinkConfig, Modulation, Reception, Route, SignalTrace, Stage};
pub use traits::{Keying, LineCode};

pub use channel_physics::{apply_noise, NoiseGenerator, NoiseSource, Silence};

rustler::init!("Elixir.BasebandLink.Native");
