//! Run context.
//!
//! The based city anchors trip reconstruction; the time zone interprets
//! every wall-clock time in the input.

use chrono_tz::Tz;
use tracing::debug;

use crate::domain::{Iata, InvalidIata};
use crate::locations::LocationResolver;

/// Time zone used when neither an explicit zone nor a resolver gives one.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::UTC;

/// Errors from building a [`Context`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// Based city is not three letters
    #[error("Based city must be a 3 letter code: {0}")]
    InvalidBasedCity(#[from] InvalidIata),

    /// Resolver does not know the based city
    #[error("Based city must be a valid IATA code: {0} is unknown")]
    UnknownBasedCity(Iata),

    /// Not an IANA time zone name
    #[error("Time zone must be a valid time zone: {0:?}")]
    InvalidTimeZone(String),
}

/// Immutable configuration shared by every pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    based_city: Iata,
    time_zone: Tz,
}

impl Context {
    /// Build a context without a location resolver.
    ///
    /// The time zone defaults to UTC when not given.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary::Context;
    ///
    /// let ctx = Context::new("MAD", Some("Europe/Madrid")).unwrap();
    /// assert_eq!(ctx.based_city().as_str(), "MAD");
    /// assert_eq!(ctx.time_zone().name(), "Europe/Madrid");
    ///
    /// let ctx = Context::new("MAD", None).unwrap();
    /// assert_eq!(ctx.time_zone().name(), "UTC");
    ///
    /// assert!(Context::new("MADRID", None).is_err());
    /// assert!(Context::new("MAD", Some("Mars/Olympus")).is_err());
    /// ```
    pub fn new(based_city: &str, time_zone: Option<&str>) -> Result<Self, ContextError> {
        let based_city = parse_based_city(based_city)?;
        let time_zone = match time_zone {
            Some(name) => parse_time_zone(name)?,
            None => DEFAULT_TIME_ZONE,
        };
        Ok(Self {
            based_city,
            time_zone,
        })
    }

    /// Build a context, checking the based city against `resolver`.
    ///
    /// Time zone resolution order: explicit `time_zone`, then the based
    /// city's zone from the resolver, then UTC.
    pub fn with_resolver<R: LocationResolver + ?Sized>(
        based_city: &str,
        time_zone: Option<&str>,
        resolver: &R,
    ) -> Result<Self, ContextError> {
        let based_city = parse_based_city(based_city)?;
        let location = resolver
            .resolve(&based_city)
            .ok_or(ContextError::UnknownBasedCity(based_city))?;

        let time_zone = match time_zone {
            Some(name) => parse_time_zone(name)?,
            None => parse_time_zone(&location.tz_name)?,
        };

        debug!(%based_city, time_zone = time_zone.name(), "resolved context");
        Ok(Self {
            based_city,
            time_zone,
        })
    }

    pub fn based_city(&self) -> Iata {
        self.based_city
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }
}

/// Based city codes are accepted in any case.
fn parse_based_city(code: &str) -> Result<Iata, ContextError> {
    Ok(Iata::parse(&code.trim().to_ascii_uppercase())?)
}

fn parse_time_zone(name: &str) -> Result<Tz, ContextError> {
    name.parse::<Tz>()
        .map_err(|_| ContextError::InvalidTimeZone(name.to_string()))
}
