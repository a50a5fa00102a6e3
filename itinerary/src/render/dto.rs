//! Data transfer objects for JSON output.

use serde::Serialize;

use crate::domain::{Details, Segment, Trip};
use crate::pipeline::Itinerary;

/// The whole run as JSON.
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    /// True iff no diagnostics were produced
    pub success: bool,

    /// Trips in build order
    pub trips: Vec<TripResult>,

    /// Diagnostic messages in processing order
    pub errors: Vec<String>,
}

/// A trip away from the based city.
#[derive(Debug, Serialize)]
pub struct TripResult {
    /// Destination code, if one was set or inferred
    pub destination: Option<String>,

    /// Whether the trip was closed
    pub closed: bool,

    /// Date the first segment starts (YYYY-MM-DD)
    pub departure_date: Option<String>,

    /// Date the last segment ends (YYYY-MM-DD)
    pub arrival_date: Option<String>,

    /// Minutes between the first and last segment starts
    pub duration_mins: Option<i64>,

    /// Segments in trip order
    pub segments: Vec<SegmentResult>,
}

/// A segment of a trip.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SegmentResult {
    Flight(RouteResult),
    Train(RouteResult),
    Hotel(StayResult),
}

/// A flight or train.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub origin: String,
    pub destination: String,

    /// RFC 3339 timestamp with offset
    pub departure_at: String,

    /// RFC 3339 timestamp with offset
    pub arrival_at: String,

    pub is_a_connection: bool,
    pub line_number: usize,
}

/// A hotel stay.
#[derive(Debug, Serialize)]
pub struct StayResult {
    pub location: String,
    pub check_in_on: String,
    pub check_out_on: String,
    pub line_number: usize,
}

// Conversion implementations

impl ItineraryResponse {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            success: itinerary.is_success(),
            trips: itinerary.trips.iter().map(TripResult::from_trip).collect(),
            errors: itinerary.errors(),
        }
    }
}

impl TripResult {
    /// Create from a domain Trip.
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            destination: trip.destination().map(|d| d.to_string()),
            closed: trip.is_closed(),
            departure_date: trip.departure_date().map(|d| d.to_string()),
            arrival_date: trip.arrival_date().map(|d| d.to_string()),
            duration_mins: trip.duration().map(|d| d.num_minutes()),
            segments: trip.segments().iter().map(SegmentResult::from_segment).collect(),
        }
    }
}

impl SegmentResult {
    /// Create from a domain Segment.
    pub fn from_segment(segment: &Segment) -> Self {
        match segment.details() {
            Details::Flight(_) => SegmentResult::Flight(RouteResult::from_segment(segment)),
            Details::Train(_) => SegmentResult::Train(RouteResult::from_segment(segment)),
            Details::Hotel(stay) => SegmentResult::Hotel(StayResult {
                location: stay.location.to_string(),
                check_in_on: stay.check_in_on.to_string(),
                check_out_on: stay.check_out_on.to_string(),
                line_number: segment.line_number(),
            }),
        }
    }
}

impl RouteResult {
    fn from_segment(segment: &Segment) -> Self {
        let (origin, destination) = segment
            .route()
            .map(|r| (r.origin.to_string(), r.destination.to_string()))
            .unwrap_or_default();

        Self {
            origin,
            destination,
            departure_at: segment.departure_at().to_rfc3339(),
            arrival_at: segment.arrival_at().to_rfc3339(),
            is_a_connection: segment.is_a_connection(),
            line_number: segment.line_number(),
        }
    }
}
