//! Itinerary parser and trip reconstruction.
//!
//! Turns a plain-text itinerary of reservation blocks, each listing flight,
//! train and hotel lines, into trips away from a based city. Malformed
//! input is reported line by line instead of aborting the run.

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod domain;
pub mod locations;
pub mod parsing;
pub mod pipeline;
pub mod render;
pub mod reservations;
pub mod trips;

pub use context::Context;
pub use diagnostics::{Diagnostic, Outcome, Severity};
pub use pipeline::{Itinerary, build_itinerary, build_itinerary_from_reader};
