//! Location lookup.
//!
//! Maps IATA codes to the IANA time zone of the place they name. Used only
//! when building a [`Context`](crate::context::Context), never mid-parse.

mod error;
mod table;

pub use error::LocationError;
pub use table::{Location, LocationTable, LocationTableBuilder};

use crate::domain::Iata;

/// Anything that can resolve a location code.
pub trait LocationResolver {
    /// Look up a location, returning `None` for unknown codes.
    fn resolve(&self, code: &Iata) -> Option<Location>;
}
