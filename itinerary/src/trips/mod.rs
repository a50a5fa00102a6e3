//! Trip reconstruction from parsed segments.
//!
//! Flights and trains are stitched into trips that leave and return to the
//! based city, with same-day connections detected along the way. Hotels are
//! attached afterwards to the trip they belong to.

mod builder;

pub use builder::{CONNECTION_WINDOW_HOURS, TripBuilder};
