//! NIF interface for Elixir
//!
//! Exposes one-shot link runs. Modulation is selected per call by atom
//! (`:ask`, `:bpsk`) or string; the noise stream is seeded from the params so
//! every call is reproducible.

use rustler::{Atom, NifResult, NifStruct, Term};

use channel_physics::NoiseGenerator;

use crate::error::LinkError;
use crate::link::{LinkConfig, Modulation};
use crate::{ber, text};

rustler::atoms! {
    ok,
}

/// Link parameters from Elixir
#[derive(NifStruct, Debug, Clone)]
#[module = "BasebandLink.Types.LinkParams"]
pub struct LinkParams {
    pub amplitude: f64,
    pub snr_db: f64,
    pub seed: u64,
}

fn to_nif_error(err: LinkError) -> rustler::Error {
    rustler::Error::Term(Box::new(err.to_string()))
}

fn decode_modulation(term: Term<'_>) -> NifResult<Modulation> {
    let name = if term.is_atom() {
        term.atom_to_string()?
    } else {
        term.decode::<String>()?
    };

    name.parse().map_err(to_nif_error)
}

fn build_config(modulation: Term<'_>, params: &LinkParams) -> NifResult<LinkConfig> {
    let modulation = decode_modulation(modulation)?;
    Ok(LinkConfig::new(params.amplitude, params.snr_db, modulation))
}

/// Send `text` over the link
///
/// # Returns
/// `{:ok, recovered_text, ber}`
#[rustler::nif(schedule = "DirtyCpu")]
pub fn simulate<'a>(
    text: String,
    modulation: Term<'a>,
    params: LinkParams,
) -> NifResult<(Atom, String, f64)> {
    let config = build_config(modulation, &params)?;
    let mut noise = NoiseGenerator::from_seed(params.seed);

    let reception = config.run(&text, &mut noise).map_err(to_nif_error)?;

    Ok((ok(), reception.recovered_text, reception.ber))
}

/// Send `text` over the link, keeping both signals for plotting
///
/// # Returns
/// `{:ok, recovered_text, ber, transmitted, received}`
#[rustler::nif(schedule = "DirtyCpu")]
pub fn simulate_traced<'a>(
    text: String,
    modulation: Term<'a>,
    params: LinkParams,
) -> NifResult<(Atom, String, f64, Vec<f64>, Vec<f64>)> {
    let config = build_config(modulation, &params)?;
    let mut noise = NoiseGenerator::from_seed(params.seed);

    let (reception, trace) = config.run_traced(&text, &mut noise).map_err(to_nif_error)?;

    Ok((
        ok(),
        reception.recovered_text,
        reception.ber,
        trace.transmitted,
        trace.received,
    ))
}

/// Bits (0/1 list) for `text`, MSB first
#[rustler::nif]
pub fn text_to_bits(text: String) -> NifResult<Vec<u8>> {
    text::encode(&text).map_err(to_nif_error)
}

/// Text for a bit list; a partial trailing byte is dropped
#[rustler::nif]
pub fn bits_to_text(bits: Vec<u8>) -> String {
    text::decode(&bits)
}

#[rustler::nif]
pub fn bit_error_rate(original: Vec<u8>, recovered: Vec<u8>) -> f64 {
    ber::ber(&original, &recovered)
}
