//! Trip reconstruction.
//!
//! Segments are sorted by start time. Flights and trains are then folded
//! left to right into trips anchored at the based city, and finally each
//! hotel is slotted into the trip whose destination and dates it fits.

use std::collections::HashSet;
use std::iter;

use chrono::Duration;
use tracing::{debug, trace};

use crate::context::Context;
use crate::diagnostics::{Diagnostic, Outcome};
use crate::domain::{DomainError, Iata, Route, Segment, Trip};

/// Two moving segments starting less than this many hours apart, with
/// matching endpoints, form a connection.
pub const CONNECTION_WINDOW_HOURS: i64 = 24;

/// Builds trips from a flat segment list.
///
/// # Examples
///
/// ```
/// use itinerary::Context;
/// use itinerary::parsing::{ParseSegment, SegmentParser};
/// use itinerary::trips::TripBuilder;
///
/// let ctx = Context::new("MAD", None).unwrap();
/// let parser = SegmentParser::new(&ctx);
/// let segments = vec![
///     parser.parse("Flight BCN 2026-01-03 18:00 -> MAD 19:30", 3).unwrap(),
///     parser.parse("Flight MAD 2026-01-01 10:00 -> BCN 11:30", 2).unwrap(),
/// ];
///
/// let outcome = TripBuilder::new(segments, &ctx).build();
/// assert!(outcome.is_success());
/// assert_eq!(outcome.value.len(), 1);
/// assert_eq!(outcome.value[0].destination().unwrap().as_str(), "BCN");
/// ```
#[derive(Debug, Clone)]
pub struct TripBuilder {
    segments: Vec<Segment>,
    based_city: Iata,
}

impl TripBuilder {
    /// Takes ownership of the segments and stable-sorts them by start time.
    pub fn new(mut segments: Vec<Segment>, context: &Context) -> Self {
        segments.sort_by_key(Segment::starts_at);
        Self {
            segments,
            based_city: context.based_city(),
        }
    }

    /// The segments in the order the builder will process them.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Build the trips.
    ///
    /// The outcome is successful iff no diagnostic was produced. A fatal
    /// diagnostic stops building; trips formed before it are still
    /// returned.
    pub fn build(self) -> Outcome<Vec<Trip>> {
        let (moving, hotels): (Vec<Segment>, Vec<Segment>) =
            self.segments.into_iter().partition(Segment::is_moving);

        let mut run = Run {
            based_city: self.based_city,
            trips: Vec::new(),
            diagnostics: Vec::new(),
        };

        if let Err(fatal) = run.execute(moving, hotels) {
            debug!(%fatal, "trip building stopped");
            run.diagnostics.push(fatal);
        }

        debug!(
            trips = run.trips.len(),
            problems = run.diagnostics.len(),
            "built trips"
        );
        Outcome::new(run.trips, run.diagnostics)
    }
}

/// Mutable state of one build.
struct Run {
    based_city: Iata,
    trips: Vec<Trip>,
    diagnostics: Vec<Diagnostic>,
}

impl Run {
    fn execute(&mut self, moving: Vec<Segment>, hotels: Vec<Segment>) -> Result<(), Diagnostic> {
        if moving.is_empty() {
            return Err(Diagnostic::fatal(
                None,
                "No flight/train segments found: cannot infer any trips",
            ));
        }

        let routes: Vec<Route> = moving.iter().filter_map(Segment::route).copied().collect();

        self.fold_moving(moving)?;
        self.check_based_city(&routes)?;
        self.close_open_trips()?;
        self.attach_hotels(hotels);
        Ok(())
    }

    /// Single pass over the sorted flights and trains with one current
    /// trip, held as an index into `trips`.
    fn fold_moving(&mut self, moving: Vec<Segment>) -> Result<(), Diagnostic> {
        let next_origins: Vec<Option<Iata>> = moving
            .iter()
            .skip(1)
            .map(Segment::origin)
            .chain(iter::once(None))
            .collect();

        let mut current = None;
        for (segment, next_origin) in moving.into_iter().zip(next_origins) {
            current = self.step(current, segment, next_origin)?;
        }
        Ok(())
    }

    fn step(
        &mut self,
        current: Option<usize>,
        mut segment: Segment,
        next_origin: Option<Iata>,
    ) -> Result<Option<usize>, Diagnostic> {
        let Some(route) = segment.route().copied() else {
            return Ok(current);
        };
        let line = segment.line_number();

        let Some(index) = current else {
            return Ok(self.open_trip(segment, route));
        };
        let based_city = self.based_city;
        let trip = &mut self.trips[index];

        if route.destination == based_city {
            trace!(line, "segment returns to base, closing trip");
            trip.add_segment(segment).map_err(|e| fatal(line, e))?;
            trip.close().map_err(|e| fatal(line, e))?;
            return Ok(None);
        }

        if is_connection(trip, &segment) {
            trace!(line, "segment is a connection");
            segment.mark_as_connection();
            trip.add_segment(segment).map_err(|e| fatal(line, e))?;
            trip.set_destination(route.destination)
                .map_err(|e| fatal(line, e))?;

            // The chain continues only if the next segment leaves from here.
            if next_origin == Some(route.destination) {
                return Ok(Some(index));
            }
            return Ok(None);
        }

        let continues = trip.last_segment().and_then(Segment::destination) == Some(route.origin);
        if continues {
            trace!(line, "segment continues trip");
            trip.add_segment(segment).map_err(|e| fatal(line, e))?;
            trip.set_destination(route.destination)
                .map_err(|e| fatal(line, e))?;
            return Ok(Some(index));
        }

        debug!(line, "segment fits no trip");
        self.diagnostics.push(Diagnostic::recoverable(
            Some(line),
            format!(
                "Segment at line {line} must start in {based_city} or end in {based_city} \
                 or connect with the current trip"
            ),
        ));
        Ok(current)
    }

    fn open_trip(&mut self, segment: Segment, route: Route) -> Option<usize> {
        let line = segment.line_number();
        if route.origin != self.based_city {
            self.diagnostics.push(Diagnostic::recoverable(
                Some(line),
                format!(
                    "Segment at line {line} does not start at base city {}",
                    self.based_city
                ),
            ));
            return None;
        }

        trace!(line, "opening trip");
        self.trips.push(Trip::open(self.based_city, segment));
        Some(self.trips.len() - 1)
    }

    /// Warn if the based city only appears later; fail if it never does.
    fn check_based_city(&mut self, routes: &[Route]) -> Result<(), Diagnostic> {
        let based_city = self.based_city;
        if routes.first().is_some_and(|r| r.origin == based_city) {
            return Ok(());
        }

        if routes.iter().any(|r| r.origin == based_city) {
            self.diagnostics.push(Diagnostic::recoverable(
                None,
                format!(
                    "Based city {based_city} does not match the first segment origin. \
                     Continuing; this could lead to incorrect results."
                ),
            ));
            return Ok(());
        }

        let candidates = base_candidates(routes);
        let mut message = format!("Based city {based_city} does not match any segment origin.");
        if !candidates.is_empty() {
            let names: Vec<&str> = candidates.iter().map(Iata::as_str).collect();
            message.push_str(&format!(" Possible base cities: {}", names.join(", ")));
        }
        Err(Diagnostic::fatal(None, message))
    }

    /// Trips that never returned to base still need a destination.
    fn close_open_trips(&mut self) -> Result<(), Diagnostic> {
        for trip in self.trips.iter_mut().filter(|t| !t.is_closed()) {
            let line = trip.last_segment().map(Segment::line_number);
            trip.close()
                .map_err(|e| Diagnostic::fatal(line, e.to_string()))?;
        }
        Ok(())
    }

    fn attach_hotels(&mut self, hotels: Vec<Segment>) {
        for hotel in hotels {
            let line = hotel.line_number();
            let Some(location) = hotel.location() else {
                continue;
            };

            let Some(trip) = self.trips.iter_mut().find(|t| t.matches_hotel(&hotel)) else {
                debug!(line, %location, "hotel matches no trip");
                self.diagnostics.push(Diagnostic::recoverable(
                    Some(line),
                    format!("Hotel at {location} (line {line}) does not match any trip"),
                ));
                continue;
            };

            if let Err(err) = trip.insert_hotel(hotel) {
                self.diagnostics
                    .push(Diagnostic::recoverable(Some(line), err.to_string()));
            }
        }
    }
}

/// Whether `segment` chains onto the trip's last segment.
///
/// Once the last segment is flagged as a connection the chain continues
/// regardless of elapsed time.
fn is_connection(trip: &Trip, segment: &Segment) -> bool {
    let Some(last) = trip.last_segment() else {
        return false;
    };
    if last.is_hotel() {
        return false;
    }
    if last.is_a_connection() {
        return true;
    }

    let gap = segment.starts_at().signed_duration_since(last.starts_at());
    gap < Duration::hours(CONNECTION_WINDOW_HOURS) && last.destination() == segment.origin()
}

/// Cities that are only ever departed from, in first-seen order.
fn base_candidates(routes: &[Route]) -> Vec<Iata> {
    let destinations: HashSet<Iata> = routes.iter().map(|r| r.destination).collect();
    let mut seen = HashSet::new();
    routes
        .iter()
        .map(|r| r.origin)
        .filter(|origin| !destinations.contains(origin) && seen.insert(*origin))
        .collect()
}

fn fatal(line: usize, err: DomainError) -> Diagnostic {
    Diagnostic::fatal(Some(line), err.to_string())
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
