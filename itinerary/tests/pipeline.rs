//! End-to-end runs over itinerary text.

use itinerary::config::RunConfig;
use itinerary::render::{render_json, render_text};
use itinerary::{Context, Severity, build_itinerary, build_itinerary_from_reader};

const TWO_TRIPS: &str = include_str!("fixtures/two_trips.txt");
const BROKEN: &str = include_str!("fixtures/broken.txt");

fn seville() -> Context {
    let config = RunConfig::new("SVQ");
    let table = config.location_table().unwrap();
    config.context(&table).unwrap()
}

fn madrid() -> Context {
    Context::new("MAD", None).unwrap()
}

fn destinations(itinerary: &itinerary::Itinerary) -> Vec<String> {
    itinerary
        .trips
        .iter()
        .map(|t| t.destination().map(|d| d.to_string()).unwrap_or_default())
        .collect()
}

#[test]
fn builds_trips_from_fixture() {
    let itinerary = build_itinerary(TWO_TRIPS, &seville());

    assert!(itinerary.is_success(), "{:?}", itinerary.errors());
    assert_eq!(destinations(&itinerary), vec!["BCN", "MAD", "NYC"]);
    assert!(itinerary.trips.iter().all(|t| t.is_closed()));

    // The NYC trip connects through BCN
    let nyc = &itinerary.trips[2];
    let flags: Vec<bool> = nyc.segments().iter().map(|s| s.is_a_connection()).collect();
    assert_eq!(flags, vec![false, true]);
}

#[test]
fn renders_fixture_as_text() {
    let itinerary = build_itinerary(TWO_TRIPS, &seville());
    let text = render_text(&itinerary).unwrap();

    let expected = "\
TRIP to BCN
Flight from SVQ to BCN at 2023-01-05 20:40 to 22:10
Hotel at BCN on 2023-01-05 to 2023-01-10
Flight from BCN to SVQ at 2023-01-10 10:30 to 11:50

TRIP to MAD
Train from SVQ to MAD at 2023-02-15 09:30 to 11:00
Hotel at MAD on 2023-02-15 to 2023-02-17
Train from MAD to SVQ at 2023-02-17 17:00 to 19:30

TRIP to NYC
Flight from SVQ to BCN at 2023-03-02 06:40 to 09:10
Flight from BCN to NYC at 2023-03-02 15:00 to 22:45";

    assert_eq!(text.trim_end(), expected);
}

#[test]
fn times_are_local_to_the_based_city() {
    let itinerary = build_itinerary(TWO_TRIPS, &seville());
    let json = render_json(&itinerary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value["trips"][0]["segments"][0]["departure_at"],
        "2023-01-05T20:40:00+01:00"
    );
}

#[test]
fn collects_every_problem() {
    let itinerary = build_itinerary(BROKEN, &seville());

    assert_eq!(
        itinerary.errors(),
        vec![
            "Segment line at line 1 must be part of a reservation",
            "Unknown segment type at line 4: \"Boat BCN 2023-01-06 10:00 -> IBZ 14:00\"",
            "Unknown statement at line 5: not a statement",
            "Invalid segment line 6: ends_at must be >= starts_at",
            "Reservation at line 7 must have at least one segment",
            "Hotel at NYC (line 9) does not match any trip",
        ]
    );
    assert!(
        itinerary
            .diagnostics
            .iter()
            .all(|d| d.severity == Severity::Recoverable)
    );

    // The one good flight still makes a trip
    assert_eq!(destinations(&itinerary), vec!["BCN"]);

    let text = render_text(&itinerary).unwrap();
    assert!(text.contains("TRIP to BCN"));
    assert!(text.contains("ERRORS"));
    assert!(text.contains("- Hotel at NYC (line 9) does not match any trip"));
}

#[test]
fn single_outbound_flight() {
    let itinerary = build_itinerary(
        "RESERVATION\nSEGMENT: Flight MAD 2026-01-01 10:00 -> BCN 12:00\n",
        &madrid(),
    );

    assert!(itinerary.is_success());
    assert_eq!(destinations(&itinerary), vec!["BCN"]);
    assert!(itinerary.trips[0].is_closed());
}

#[test]
fn same_day_return() {
    let itinerary = build_itinerary(
        "RESERVATION\n\
         SEGMENT: Flight MAD 2026-01-01 10:00 -> BCN 12:00\n\
         SEGMENT: Flight BCN 2026-01-01 13:00 -> MAD 15:00\n",
        &madrid(),
    );

    assert!(itinerary.is_success());
    let trip = &itinerary.trips[0];
    assert_eq!(trip.segments().len(), 2);
    assert_eq!(trip.destination().unwrap().as_str(), "BCN");
    assert_eq!(trip.duration().unwrap().num_hours(), 3);
}

#[test]
fn orphan_segment_only() {
    let itinerary = build_itinerary(
        "SEGMENT: Flight MAD 2026-01-01 10:00 -> BCN 12:00\n",
        &madrid(),
    );

    assert!(itinerary.trips.is_empty());
    let first = &itinerary.diagnostics[0];
    assert!(first.message.contains("must be part of a reservation"));
    assert_eq!(first.line_number, Some(1));
}

#[test]
fn hotel_in_unvisited_city() {
    let itinerary = build_itinerary(
        "RESERVATION\n\
         SEGMENT: Flight MAD 2026-01-01 10:00 -> BCN 12:00\n\
         RESERVATION\n\
         SEGMENT: Hotel NYC 2026-01-01 -> 2026-01-02\n",
        &madrid(),
    );

    assert_eq!(itinerary.trips[0].segments().len(), 1);
    let errors = itinerary.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("does not match any trip"));
    assert!(errors[0].contains("NYC"));
    assert!(errors[0].contains("line 4"));
}

#[test]
fn onward_connection() {
    let itinerary = build_itinerary(
        "RESERVATION\n\
         SEGMENT: Flight MAD 2026-01-01 10:00 -> BCN 12:00\n\
         SEGMENT: Flight BCN 2026-01-01 14:00 -> AMS 16:30\n",
        &madrid(),
    );

    assert!(itinerary.is_success());
    let trip = &itinerary.trips[0];
    assert!(trip.segments()[1].is_a_connection());
    assert_eq!(trip.destination().unwrap().as_str(), "AMS");
}

#[test]
fn unknown_based_city_is_a_setup_error() {
    let config = RunConfig::new("ZZZ");
    let table = config.location_table().unwrap();
    assert!(config.context(&table).is_err());
}

#[test]
fn runs_are_repeatable() {
    let first = build_itinerary(BROKEN, &seville());
    let second = build_itinerary(BROKEN, &seville());
    assert_eq!(first, second);

    let third = build_itinerary_from_reader(BROKEN.as_bytes(), &seville()).unwrap();
    assert_eq!(first, third);
}
