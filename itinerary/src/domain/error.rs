//! Domain error types.
//!
//! These errors represent invariant violations inside the itinerary
//! entities. They are distinct from parsing errors, which wrap them
//! together with the offending line.

use super::Iata;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A segment that ends before it starts
    #[error("ends_at must be >= starts_at")]
    EndsBeforeStarts,

    /// A hotel day boundary that does not exist in the time zone
    #[error("{0} does not exist in the time zone")]
    NonexistentLocalTime(String),

    /// Reservation block with no segment lines
    #[error("Reservation at line {0} must have at least one segment")]
    EmptyReservation(usize),

    /// Segment added to a closed trip
    #[error("Trip is closed, cannot add segments")]
    TripClosed,

    /// Closing a trip twice
    #[error("Trip is already closed")]
    TripAlreadyClosed,

    /// No segment qualifies as the trip destination
    #[error("Destination IATA could not be inferred")]
    DestinationNotInferred,

    /// Hotel with no moving segment arriving at its location
    #[error("Hotel segment could not be inserted: no segment found with destination in {0}")]
    HotelNotInsertable(Iata),

    /// A flight or train segment passed where a hotel was expected
    #[error("segment at line {0} is not a hotel")]
    NotAHotel(usize),
}
