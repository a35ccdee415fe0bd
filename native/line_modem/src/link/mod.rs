//! End-to-end link
//!
//! A run is one linear pass through the stages:
//! text → bits → symbols → signal → channel → signal → symbols → bits → text,
//! with the original bits kept for the BER comparison.
//!
//! The modulation selector picks a route (a line code paired with a keying);
//! the orchestration itself is shared by both routes.

mod config;
mod pipeline;
mod route;

pub use config::{LinkConfig, Modulation};
pub use pipeline::{Reception, SignalTrace, Stage};
pub use route::Route;
