//! Domain types for itineraries.
//!
//! This module contains the entities the pipeline produces: location
//! codes, segments, reservations and trips. All types enforce their
//! invariants at construction time, so code that receives these types can
//! trust their validity.

mod error;
mod iata;
mod reservation;
mod segment;
mod time;
mod trip;

pub use error::DomainError;
pub use iata::{Iata, InvalidIata};
pub use reservation::Reservation;
pub use segment::{Details, Route, Segment, SegmentKind, Stay};
pub use time::{end_of_day, localize, start_of_day};
pub use trip::Trip;
