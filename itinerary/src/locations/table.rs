//! In-memory location table.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{LocationError, LocationResolver};
use crate::domain::Iata;

/// A resolved location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub code: Iata,
    /// IANA time zone name, e.g. "Europe/Madrid"
    pub tz_name: String,
    pub name: Option<String>,
}

/// One entry of a JSON location table.
#[derive(Debug, Deserialize)]
struct LocationDto {
    iata_code: String,
    tz_name: String,
    #[serde(default)]
    name: Option<String>,
}

/// IATA code → location lookup.
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    locations: HashMap<Iata, Location>,
}

impl LocationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a location.
    pub fn insert(&mut self, location: Location) {
        self.locations.insert(location.code, location);
    }

    pub fn get(&self, code: &Iata) -> Option<&Location> {
        self.locations.get(code)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Read a JSON array of `{"iata_code", "tz_name", "name"}` objects.
    ///
    /// Entries with codes that are not 3 letters are skipped; lowercase
    /// codes are accepted and uppercased.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary::domain::Iata;
    /// use itinerary::locations::LocationTable;
    ///
    /// let json = r#"[{"iata_code": "mad", "tz_name": "Europe/Madrid"}]"#;
    /// let table = LocationTable::from_reader(json.as_bytes()).unwrap();
    ///
    /// let mad = table.get(&Iata::parse("MAD").unwrap()).unwrap();
    /// assert_eq!(mad.tz_name, "Europe/Madrid");
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LocationError> {
        let entries: Vec<LocationDto> = serde_json::from_reader(reader)?;
        let table = build_table(entries);
        debug!(locations = table.len(), "loaded location table");
        Ok(table)
    }

    /// Load a JSON location table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LocationError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// A small table of common airports and rail hubs.
    pub fn builtin() -> Self {
        LocationTableBuilder::new()
            .add("AGP", "Europe/Madrid", "Málaga")
            .add("AMS", "Europe/Amsterdam", "Amsterdam")
            .add("BCN", "Europe/Madrid", "Barcelona")
            .add("BER", "Europe/Berlin", "Berlin")
            .add("BIO", "Europe/Madrid", "Bilbao")
            .add("BRU", "Europe/Brussels", "Brussels")
            .add("CDG", "Europe/Paris", "Paris Charles de Gaulle")
            .add("DUB", "Europe/Dublin", "Dublin")
            .add("FCO", "Europe/Rome", "Rome Fiumicino")
            .add("FRA", "Europe/Berlin", "Frankfurt")
            .add("JFK", "America/New_York", "New York JFK")
            .add("LAX", "America/Los_Angeles", "Los Angeles")
            .add("LGW", "Europe/London", "London Gatwick")
            .add("LHR", "Europe/London", "London Heathrow")
            .add("LIS", "Europe/Lisbon", "Lisbon")
            .add("MAD", "Europe/Madrid", "Madrid")
            .add("MUC", "Europe/Berlin", "Munich")
            .add("NYC", "America/New_York", "New York")
            .add("ORY", "Europe/Paris", "Paris Orly")
            .add("PMI", "Europe/Madrid", "Palma de Mallorca")
            .add("SVQ", "Europe/Madrid", "Seville")
            .add("VLC", "Europe/Madrid", "Valencia")
            .add("ZRH", "Europe/Zurich", "Zurich")
            .build()
    }
}

impl LocationResolver for LocationTable {
    fn resolve(&self, code: &Iata) -> Option<Location> {
        self.get(code).cloned()
    }
}

/// Builder for creating location tables.
///
/// Provides a fluent API for adding locations.
#[derive(Debug, Default)]
pub struct LocationTableBuilder {
    inner: LocationTable,
}

impl LocationTableBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location; invalid codes are ignored.
    pub fn add(mut self, code: &str, tz_name: &str, name: &str) -> Self {
        if let Ok(code) = Iata::parse(code) {
            self.inner.insert(Location {
                code,
                tz_name: tz_name.to_string(),
                name: Some(name.to_string()),
            });
        }
        self
    }

    /// Build the location table.
    pub fn build(self) -> LocationTable {
        self.inner
    }
}

/// Build the table from DTOs, skipping unusable codes.
fn build_table(entries: Vec<LocationDto>) -> LocationTable {
    let mut table = LocationTable::new();
    for entry in entries {
        let Ok(code) = Iata::parse(&entry.iata_code.to_uppercase()) else {
            continue;
        };
        table.insert(Location {
            code,
            tz_name: entry.tz_name,
            name: entry.name,
        });
    }
    table
}
