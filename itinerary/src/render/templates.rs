//! Askama templates for plain-text output.

use askama::Template;

use crate::domain::{Details, Segment, Trip};
use crate::pipeline::Itinerary;

/// The whole itinerary as text, trips first, then any problems.
#[derive(Template)]
#[template(path = "itinerary.txt", escape = "none")]
pub struct ItineraryTemplate {
    pub trips: Vec<TripView>,
    pub errors: Vec<String>,
}

impl ItineraryTemplate {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            trips: itinerary.trips.iter().map(TripView::from_trip).collect(),
            errors: itinerary.errors(),
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Trip view model: a heading and one line per segment.
#[derive(Debug, Clone)]
pub struct TripView {
    pub destination: String,
    pub lines: Vec<String>,
}

impl TripView {
    /// Create from a domain Trip.
    pub fn from_trip(trip: &Trip) -> Self {
        let destination = trip
            .destination()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "?".to_string());

        Self {
            destination,
            lines: trip.segments().iter().map(describe_segment).collect(),
        }
    }
}

/// One line of text for a segment, e.g.
/// "Flight from MAD to BCN at 2026-01-01 10:00 to 12:00".
pub fn describe_segment(segment: &Segment) -> String {
    match segment.details() {
        Details::Flight(route) | Details::Train(route) => {
            let start = segment.starts_at();
            let end = segment.ends_at();
            // Overnight legs show the arrival date too
            let end_format = if end.date_naive() == start.date_naive() {
                "%H:%M"
            } else {
                "%Y-%m-%d %H:%M"
            };
            format!(
                "{} from {} to {} at {} to {}",
                segment.kind().label(),
                route.origin,
                route.destination,
                start.format("%Y-%m-%d %H:%M"),
                end.format(end_format)
            )
        }
        Details::Hotel(stay) => format!(
            "Hotel at {} on {} to {}",
            stay.location,
            stay.check_in_on.format("%Y-%m-%d"),
            stay.check_out_on.format("%Y-%m-%d")
        ),
    }
}
