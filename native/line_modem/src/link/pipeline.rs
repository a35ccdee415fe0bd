//! Link pipeline
//!
//! Validation happens before the first stage, so a bad selector or parameter
//! never produces a partial result.

use std::fmt;

use channel_physics::{AwgnChannel, NoiseSource};

use super::config::{LinkConfig, Modulation};
use super::route::Route;
use crate::ber::ber;
use crate::error::LinkResult;
use crate::keying::{Ask, Bpsk};
use crate::line_codes::{Ami, Nrz};
use crate::text;
use crate::traits::{Keying, LineCode};

/// Pipeline stage, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Encoding,
    Modulating,
    Channel,
    Demodulating,
    Decoding,
    Analyzing,
    Done,
}

impl Stage {
    pub const SEQUENCE: [Stage; 7] = [
        Stage::Encoding,
        Stage::Modulating,
        Stage::Channel,
        Stage::Demodulating,
        Stage::Decoding,
        Stage::Analyzing,
        Stage::Done,
    ];

    /// Following stage, `None` after `Done`
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Encoding => Some(Stage::Modulating),
            Stage::Modulating => Some(Stage::Channel),
            Stage::Channel => Some(Stage::Demodulating),
            Stage::Demodulating => Some(Stage::Decoding),
            Stage::Decoding => Some(Stage::Analyzing),
            Stage::Analyzing => Some(Stage::Done),
            Stage::Done => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Encoding => "encoding",
            Stage::Modulating => "modulating",
            Stage::Channel => "channel",
            Stage::Demodulating => "demodulating",
            Stage::Decoding => "decoding",
            Stage::Analyzing => "analyzing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// What the receiver ends up with
#[derive(Debug, Clone, PartialEq)]
pub struct Reception {
    pub recovered_text: String,
    pub ber: f64,
}

/// Transmitted and received signals of one run, for plotting
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignalTrace {
    pub transmitted: Vec<f64>,
    pub received: Vec<f64>,
}

/// Physical-layer result of one pass through a route
struct Transceived {
    bits: Vec<u8>,
    trace: SignalTrace,
}

fn enter(stage: Stage) {
    tracing::trace!(%stage, "stage");
}

impl LinkConfig {
    /// Send `text` over the link and report what came out
    pub fn run<N>(&self, text: &str, noise: &mut N) -> LinkResult<Reception>
    where
        N: NoiseSource + ?Sized,
    {
        self.execute(text, noise).map(|(reception, _)| reception)
    }

    /// Like [`run`](Self::run), also returning both signals
    pub fn run_traced<N>(&self, text: &str, noise: &mut N) -> LinkResult<(Reception, SignalTrace)>
    where
        N: NoiseSource + ?Sized,
    {
        self.execute(text, noise)
    }

    fn execute<N>(&self, text: &str, noise: &mut N) -> LinkResult<(Reception, SignalTrace)>
    where
        N: NoiseSource + ?Sized,
    {
        self.validate()?;

        let span = tracing::debug_span!(
            "link_run",
            modulation = %self.modulation,
            snr_db = self.snr_db,
            amplitude = self.amplitude,
        );
        let _guard = span.enter();

        enter(Stage::Encoding);
        let bits = text::encode(text)?;

        let Transceived { bits: recovered_bits, trace } = match self.modulation {
            Modulation::Ask => self.transceive(&Route::new(Ami, Ask), &bits, noise),
            Modulation::Bpsk => self.transceive(&Route::new(Nrz, Bpsk), &bits, noise),
        };

        let recovered_text = text::decode(&recovered_bits);

        enter(Stage::Analyzing);
        let ber = ber(&bits, &recovered_bits);

        enter(Stage::Done);
        tracing::debug!(bits = bits.len(), ber, "link run complete");

        Ok((Reception { recovered_text, ber }, trace))
    }

    /// Line coding through line decoding for one route
    fn transceive<L, K, N>(&self, route: &Route<L, K>, bits: &[u8], noise: &mut N) -> Transceived
    where
        L: LineCode,
        K: Keying,
        N: NoiseSource + ?Sized,
    {
        let symbols = route.encode(bits);
        debug_assert_eq!(symbols.len(), bits.len());

        enter(Stage::Modulating);
        let transmitted = route.modulate(&symbols, self.amplitude);

        enter(Stage::Channel);
        let received = AwgnChannel::new(self.snr_db).apply(&transmitted, noise);

        enter(Stage::Demodulating);
        let detected = route.detect(&received, self.amplitude);

        enter(Stage::Decoding);
        let bits = route.decode(&detected);

        Transceived {
            bits,
            trace: SignalTrace { transmitted, received },
        }
    }
}
