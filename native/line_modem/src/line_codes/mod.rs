//! Line code implementations
//!
//! - AMI (bipolar, 3 levels)
//! - NRZ-L (polar, 2 levels)

mod ami;
mod nrz;

pub use ami::{decode_ami, encode_ami, Ami};
pub use nrz::{decode_nrz, encode_nrz, Nrz};
