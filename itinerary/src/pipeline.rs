//! Text in, trips out.
//!
//! Runs the scanner, reservation grouping and trip reconstruction in order
//! and merges their diagnostics. Trip building always runs, even when the
//! earlier stages already reported problems.

use std::io::Read;

use tracing::{debug, info};

use crate::context::Context;
use crate::diagnostics::{Diagnostic, Outcome};
use crate::domain::Trip;
use crate::parsing::{ScanError, Scanner, SegmentParser, read_input};
use crate::reservations::ReservationBuilder;
use crate::trips::TripBuilder;

/// The final result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    pub trips: Vec<Trip>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Itinerary {
    /// True iff no stage reported a problem.
    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostic messages in processing order.
    pub fn errors(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}

impl From<Outcome<Vec<Trip>>> for Itinerary {
    fn from(outcome: Outcome<Vec<Trip>>) -> Self {
        Self {
            trips: outcome.value,
            diagnostics: outcome.diagnostics,
        }
    }
}

/// Build trips from itinerary text.
///
/// # Examples
///
/// ```
/// use itinerary::{Context, build_itinerary};
///
/// let ctx = Context::new("MAD", None).unwrap();
/// let text = "RESERVATION\n\
///             SEGMENT: Flight MAD 2026-01-01 10:00 -> BCN 12:00\n\
///             RESERVATION\n\
///             SEGMENT: Flight BCN 2026-01-01 13:00 -> MAD 15:00\n";
///
/// let itinerary = build_itinerary(text, &ctx);
/// assert!(itinerary.is_success());
/// assert_eq!(itinerary.trips.len(), 1);
/// assert_eq!(itinerary.trips[0].segments().len(), 2);
/// ```
pub fn build_itinerary(text: &str, context: &Context) -> Itinerary {
    let scanner = Scanner::new(text);
    let reservations = ReservationBuilder::new(SegmentParser::new(context));

    let itinerary: Itinerary = reservations
        .build(scanner.statements())
        .and_then(|grouped| TripBuilder::new(grouped.segments, context).build())
        .into();

    if itinerary.is_success() {
        info!(trips = itinerary.trips.len(), "itinerary built");
    } else {
        debug!(
            trips = itinerary.trips.len(),
            problems = itinerary.diagnostics.len(),
            "itinerary built with problems"
        );
    }
    itinerary
}

/// Read a whole text source and build trips from it.
///
/// # Errors
///
/// Returns `ScanError` if the source cannot be read or is not UTF-8 text.
pub fn build_itinerary_from_reader<R: Read>(
    reader: R,
    context: &Context,
) -> Result<Itinerary, ScanError> {
    let text = read_input(reader)?;
    Ok(build_itinerary(&text, context))
}
