//! Trip type.
//!
//! A `Trip` is a round of travel away from the based city: the moving
//! segments that leave it, continue elsewhere and (usually) come back,
//! with hotel stays slotted in where the traveller arrives.

use chrono::{Duration, NaiveDate};

use super::{DomainError, Iata, Segment};

/// A trip away from the based city.
///
/// # Invariants
///
/// - Segments are kept in insertion order; hotels are inserted right after
///   the moving segment that arrives at their location, so the order is not
///   strictly chronological
/// - A closed trip has a destination and accepts no more moving segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    based_city: Iata,
    segments: Vec<Segment>,
    destination: Option<Iata>,
    closed: bool,
}

impl Trip {
    /// Open a trip with its first segment.
    pub fn open(based_city: Iata, first: Segment) -> Self {
        Self {
            based_city,
            segments: vec![first],
            destination: None,
            closed: false,
        }
    }

    pub fn based_city(&self) -> Iata {
        self.based_city
    }

    /// Append a segment to the end of the trip.
    pub fn add_segment(&mut self, segment: Segment) -> Result<(), DomainError> {
        if self.closed {
            return Err(DomainError::TripClosed);
        }
        self.segments.push(segment);
        Ok(())
    }

    /// Close the trip, inferring the destination if none was set.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The trip is already closed
    /// - No destination was set and none can be inferred
    pub fn close(&mut self) -> Result<(), DomainError> {
        if self.closed {
            return Err(DomainError::TripAlreadyClosed);
        }

        let destination = self
            .destination
            .or_else(|| self.infer_destination())
            .ok_or(DomainError::DestinationNotInferred)?;

        self.destination = Some(destination);
        self.closed = true;
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn destination(&self) -> Option<Iata> {
        self.destination
    }

    pub fn set_destination(&mut self, destination: Iata) -> Result<(), DomainError> {
        if self.closed {
            return Err(DomainError::TripClosed);
        }
        self.destination = Some(destination);
        Ok(())
    }

    /// Insert a hotel right after the last moving segment arriving at its
    /// location.
    pub fn insert_hotel(&mut self, hotel: Segment) -> Result<(), DomainError> {
        let location = hotel
            .location()
            .ok_or(DomainError::NotAHotel(hotel.line_number()))?;

        let position = self
            .segments
            .iter()
            .rposition(|s| s.destination() == Some(location))
            .ok_or(DomainError::HotelNotInsertable(location))?;

        self.segments.insert(position + 1, hotel);
        Ok(())
    }

    /// Whether a hotel belongs to this trip: same city as the destination,
    /// with the stay inside the trip's dates.
    pub fn matches_hotel(&self, hotel: &Segment) -> bool {
        let (Some(stay), Some(departure), Some(arrival)) =
            (hotel.stay(), self.departure_date(), self.arrival_date())
        else {
            return false;
        };

        self.destination == Some(stay.location)
            && stay.check_in_on >= departure
            && stay.check_out_on <= arrival
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn moving_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.is_moving())
    }

    pub fn hotel_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.is_hotel())
    }

    pub fn first_segment(&self) -> Option<&Segment> {
        self.segments.first()
    }

    pub fn last_segment(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// The last flight or train that is not part of a connection chain.
    pub fn last_non_connection(&self) -> Option<&Segment> {
        self.moving_segments().filter(|s| !s.is_a_connection()).last()
    }

    /// Local date the first segment starts on.
    pub fn departure_date(&self) -> Option<NaiveDate> {
        self.first_segment().map(|s| s.starts_at().date_naive())
    }

    /// Local date the last segment ends on.
    pub fn arrival_date(&self) -> Option<NaiveDate> {
        self.last_segment().map(|s| s.ends_at().date_naive())
    }

    /// Time between the start of the first and last segments.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.first_segment()?;
        let last = self.last_segment()?;
        Some(last.starts_at().signed_duration_since(first.starts_at()))
    }

    /// Walk the moving segments backwards and take the first arrival that
    /// is neither the based city nor a connection.
    fn infer_destination(&self) -> Option<Iata> {
        self.segments
            .iter()
            .rev()
            .filter(|s| !s.is_a_connection())
            .filter_map(Segment::destination)
            .find(|destination| *destination != self.based_city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::localize;
    use chrono::{DateTime, NaiveDate};
    use chrono_tz::Tz;

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn at(day: u32, hour: u32) -> DateTime<Tz> {
        let local = NaiveDate::from_ymd_opt(2026, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        localize(chrono_tz::UTC, local).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
    }

    fn flight(from: &str, to: &str, dep: DateTime<Tz>, arr: DateTime<Tz>) -> Segment {
        Segment::flight(iata(from), iata(to), dep, arr, 1).unwrap()
    }

    fn train(from: &str, to: &str, dep: DateTime<Tz>, arr: DateTime<Tz>) -> Segment {
        Segment::train(iata(from), iata(to), dep, arr, 1).unwrap()
    }

    fn hotel(location: &str, check_in: u32, check_out: u32) -> Segment {
        Segment::hotel(iata(location), date(check_in), date(check_out), chrono_tz::UTC, 1).unwrap()
    }

    fn trip(first: Segment) -> Trip {
        Trip::open(iata("MAD"), first)
    }

    #[test]
    fn close_infers_destination() {
        let mut trip = trip(flight("MAD", "BCN", at(1, 10), at(2, 10)));

        assert!(!trip.is_closed());
        trip.close().unwrap();

        assert!(trip.is_closed());
        assert_eq!(trip.destination(), Some(iata("BCN")));
    }

    #[test]
    fn close_keeps_explicit_destination() {
        let mut trip = trip(flight("MAD", "BCN", at(1, 10), at(1, 11)));
        trip.set_destination(iata("AMS")).unwrap();
        trip.close().unwrap();

        assert_eq!(trip.destination(), Some(iata("AMS")));
    }

    #[test]
    fn open_starts_with_first_segment() {
        let outbound = flight("MAD", "BCN", at(1, 10), at(1, 12));
        let mut trip = Trip::open(iata("MAD"), outbound.clone());

        assert_eq!(trip.segments(), &[outbound]);
        assert_eq!(trip.based_city(), iata("MAD"));
        assert!(!trip.is_closed());
        assert_eq!(trip.destination(), None);

        trip.close().unwrap();
        assert_eq!(trip.destination(), Some(iata("BCN")));
    }

    #[test]
    fn close_twice_fails() {
        let mut trip = trip(flight("MAD", "BCN", at(1, 10), at(1, 11)));
        trip.close().unwrap();

        assert_eq!(trip.close(), Err(DomainError::TripAlreadyClosed));
    }

    #[test]
    fn close_without_candidate_fails() {
        let mut trip = trip(flight("MAD", "MAD", at(1, 10), at(1, 11)));

        assert_eq!(trip.close(), Err(DomainError::DestinationNotInferred));
        assert!(!trip.is_closed());
    }

    #[test]
    fn inference_skips_connections_and_home_returns() {
        let mut trip = trip(flight("MAD", "BCN", at(1, 10), at(1, 11)));
        let mut connection = flight("BCN", "AMS", at(1, 12), at(1, 14));
        connection.mark_as_connection();
        trip.add_segment(connection).unwrap();
        trip.add_segment(flight("AMS", "MAD", at(3, 12), at(3, 15))).unwrap();

        trip.close().unwrap();
        assert_eq!(trip.destination(), Some(iata("BCN")));
    }

    #[test]
    fn add_segment_to_closed_trip_fails() {
        let mut trip = trip(flight("MAD", "BCN", at(1, 10), at(1, 11)));
        trip.close().unwrap();

        let result = trip.add_segment(flight("BCN", "MAD", at(2, 10), at(2, 11)));
        assert_eq!(result, Err(DomainError::TripClosed));
        assert_eq!(trip.set_destination(iata("AMS")), Err(DomainError::TripClosed));
    }

    #[test]
    fn insert_hotel_after_arrival() {
        let outbound = flight("MAD", "BCN", at(1, 10), at(2, 10));
        let inbound = train("BCN", "MAD", at(3, 10), at(4, 12));
        let stay = hotel("BCN", 1, 2);

        let mut trip = trip(outbound.clone());
        trip.add_segment(inbound.clone()).unwrap();
        trip.insert_hotel(stay.clone()).unwrap();

        assert_eq!(trip.segments(), &[outbound, stay, inbound]);
    }

    #[test]
    fn insert_hotel_uses_last_matching_arrival() {
        let mut trip = trip(flight("MAD", "BCN", at(1, 10), at(1, 11)));
        trip.add_segment(flight("BCN", "AMS", at(2, 10), at(2, 12))).unwrap();
        trip.add_segment(flight("AMS", "BCN", at(4, 10), at(4, 12))).unwrap();
        trip.add_segment(flight("BCN", "MAD", at(6, 10), at(6, 11))).unwrap();

        trip.insert_hotel(hotel("BCN", 4, 6)).unwrap();

        let kinds: Vec<bool> = trip.segments().iter().map(Segment::is_hotel).collect();
        assert_eq!(kinds, vec![false, false, false, true, false]);
    }

    #[test]
    fn insert_hotel_without_matching_arrival_fails() {
        let mut trip = trip(flight("MAD", "BCN", at(1, 10), at(1, 11)));

        let result = trip.insert_hotel(hotel("NYC", 1, 2));
        assert_eq!(result, Err(DomainError::HotelNotInsertable(iata("NYC"))));
    }

    #[test]
    fn insert_non_hotel_fails() {
        let mut trip = trip(flight("MAD", "BCN", at(1, 10), at(1, 11)));

        let result = trip.insert_hotel(flight("BCN", "MAD", at(2, 10), at(2, 11)));
        assert_eq!(result, Err(DomainError::NotAHotel(1)));
    }

    #[test]
    fn matches_hotel_on_destination_and_dates() {
        let mut trip = trip(flight("MAD", "BCN", at(1, 10), at(2, 10)));
        trip.set_destination(iata("BCN")).unwrap();

        assert!(trip.matches_hotel(&hotel("BCN", 1, 2)));
        assert!(!trip.matches_hotel(&hotel("NYC", 1, 2)));
        assert!(!trip.matches_hotel(&hotel("BCN", 2, 4)));
    }

    #[test]
    fn matches_hotel_needs_destination() {
        let trip = trip(flight("MAD", "BCN", at(1, 10), at(2, 10)));

        assert!(!trip.matches_hotel(&hotel("BCN", 1, 2)));
    }

    #[test]
    fn dates_and_duration() {
        let mut trip = trip(flight("MAD", "BCN", at(1, 10), at(2, 10)));
        trip.add_segment(hotel("BCN", 2, 3)).unwrap();
        trip.add_segment(train("BCN", "MAD", at(3, 10), at(4, 12))).unwrap();

        assert_eq!(trip.departure_date(), Some(date(1)));
        assert_eq!(trip.arrival_date(), Some(date(4)));
        assert_eq!(trip.duration(), Some(Duration::days(2)));
    }

    #[test]
    fn last_non_connection() {
        let outbound = flight("MAD", "BCN", at(1, 10), at(1, 12));
        let mut connection = flight("BCN", "CDG", at(1, 13), at(1, 15));
        connection.mark_as_connection();
        let inbound = flight("CDG", "MAD", at(3, 10), at(3, 12));

        let mut trip = trip(outbound);
        trip.add_segment(connection).unwrap();
        trip.add_segment(inbound.clone()).unwrap();

        assert_eq!(trip.last_non_connection(), Some(&inbound));
    }
}
