//! Segment types.
//!
//! A `Segment` is one line of a reservation: a flight, a train ride or a
//! hotel stay. All variants share a time span and a source line number;
//! the variant-specific data lives in [`Details`].

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate};
use chrono_tz::Tz;

use super::time::{end_of_day, start_of_day};
use super::{DomainError, Iata};

/// The kind of a segment, used for display and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Flight,
    Train,
    Hotel,
}

impl SegmentKind {
    /// Capitalised label, as written in itinerary lines.
    pub fn label(&self) -> &'static str {
        match self {
            SegmentKind::Flight => "Flight",
            SegmentKind::Train => "Train",
            SegmentKind::Hotel => "Hotel",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Flight => f.write_str("flight"),
            SegmentKind::Train => f.write_str("train"),
            SegmentKind::Hotel => f.write_str("hotel"),
        }
    }
}

/// Origin and destination of a flight or train.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub origin: Iata,
    pub destination: Iata,
}

/// Location and dates of a hotel stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    pub location: Iata,
    pub check_in_on: NaiveDate,
    pub check_out_on: NaiveDate,
}

/// Variant-specific segment data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Details {
    Flight(Route),
    Train(Route),
    Hotel(Stay),
}

/// A single reservation segment.
///
/// # Invariants
///
/// - `ends_at >= starts_at`
/// - Hotel spans run from the first instant of the check-in day to
///   23:59:59 of the check-out day, in the time zone the stay was built with
///
/// Segments are immutable after construction, except for the connection
/// flag which the trip builder sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    starts_at: DateTime<Tz>,
    ends_at: DateTime<Tz>,
    line_number: usize,
    is_a_connection: bool,
    details: Details,
}

impl Segment {
    fn new(
        starts_at: DateTime<Tz>,
        ends_at: DateTime<Tz>,
        line_number: usize,
        details: Details,
    ) -> Result<Self, DomainError> {
        if ends_at < starts_at {
            return Err(DomainError::EndsBeforeStarts);
        }

        Ok(Self {
            starts_at,
            ends_at,
            line_number,
            is_a_connection: false,
            details,
        })
    }

    /// Construct a flight segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary::domain::{Iata, Segment, localize};
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    /// let tz = chrono_tz::Europe::Madrid;
    /// let dep = localize(tz, day.and_hms_opt(10, 0, 0).unwrap()).unwrap();
    /// let arr = localize(tz, day.and_hms_opt(12, 0, 0).unwrap()).unwrap();
    ///
    /// let mad = Iata::parse("MAD").unwrap();
    /// let bcn = Iata::parse("BCN").unwrap();
    /// let flight = Segment::flight(mad, bcn, dep, arr, 2).unwrap();
    /// assert_eq!(flight.duration().num_hours(), 2);
    ///
    /// // Arrival before departure is rejected
    /// assert!(Segment::flight(mad, bcn, arr, dep, 2).is_err());
    /// ```
    pub fn flight(
        origin: Iata,
        destination: Iata,
        departure_at: DateTime<Tz>,
        arrival_at: DateTime<Tz>,
        line_number: usize,
    ) -> Result<Self, DomainError> {
        let route = Route {
            origin,
            destination,
        };
        Self::new(departure_at, arrival_at, line_number, Details::Flight(route))
    }

    /// Construct a train segment.
    pub fn train(
        origin: Iata,
        destination: Iata,
        departure_at: DateTime<Tz>,
        arrival_at: DateTime<Tz>,
        line_number: usize,
    ) -> Result<Self, DomainError> {
        let route = Route {
            origin,
            destination,
        };
        Self::new(departure_at, arrival_at, line_number, Details::Train(route))
    }

    /// Construct a hotel segment spanning whole days in `tz`.
    pub fn hotel(
        location: Iata,
        check_in_on: NaiveDate,
        check_out_on: NaiveDate,
        tz: Tz,
        line_number: usize,
    ) -> Result<Self, DomainError> {
        let starts_at = start_of_day(tz, check_in_on)
            .ok_or_else(|| DomainError::NonexistentLocalTime(check_in_on.to_string()))?;
        let ends_at = end_of_day(tz, check_out_on)
            .ok_or_else(|| DomainError::NonexistentLocalTime(check_out_on.to_string()))?;

        let stay = Stay {
            location,
            check_in_on,
            check_out_on,
        };
        Self::new(starts_at, ends_at, line_number, Details::Hotel(stay))
    }

    pub fn starts_at(&self) -> DateTime<Tz> {
        self.starts_at
    }

    pub fn ends_at(&self) -> DateTime<Tz> {
        self.ends_at
    }

    /// Alias of [`starts_at`](Self::starts_at) for flights and trains.
    pub fn departure_at(&self) -> DateTime<Tz> {
        self.starts_at
    }

    /// Alias of [`ends_at`](Self::ends_at) for flights and trains.
    pub fn arrival_at(&self) -> DateTime<Tz> {
        self.ends_at
    }

    /// 1-indexed line of the input this segment came from.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn is_a_connection(&self) -> bool {
        self.is_a_connection
    }

    /// Flag this segment as part of a same-day connection chain.
    pub(crate) fn mark_as_connection(&mut self) {
        self.is_a_connection = true;
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    pub fn kind(&self) -> SegmentKind {
        match self.details {
            Details::Flight(_) => SegmentKind::Flight,
            Details::Train(_) => SegmentKind::Train,
            Details::Hotel(_) => SegmentKind::Hotel,
        }
    }

    /// Returns true for flights and trains.
    pub fn is_moving(&self) -> bool {
        self.route().is_some()
    }

    pub fn is_hotel(&self) -> bool {
        matches!(self.details, Details::Hotel(_))
    }

    /// The route if this is a flight or train.
    pub fn route(&self) -> Option<&Route> {
        match &self.details {
            Details::Flight(route) | Details::Train(route) => Some(route),
            Details::Hotel(_) => None,
        }
    }

    /// The stay if this is a hotel.
    pub fn stay(&self) -> Option<&Stay> {
        match &self.details {
            Details::Hotel(stay) => Some(stay),
            Details::Flight(_) | Details::Train(_) => None,
        }
    }

    pub fn origin(&self) -> Option<Iata> {
        self.route().map(|r| r.origin)
    }

    pub fn destination(&self) -> Option<Iata> {
        self.route().map(|r| r.destination)
    }

    /// Hotel location.
    pub fn location(&self) -> Option<Iata> {
        self.stay().map(|s| s.location)
    }

    pub fn duration(&self) -> Duration {
        self.ends_at.signed_duration_since(self.starts_at)
    }
}
