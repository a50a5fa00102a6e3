//! Segment line grammar.

use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;

use super::{FieldError, ParseError, parse_date, parse_hhmm};
use crate::context::Context;
use crate::domain::{DomainError, Iata, Segment, SegmentKind, localize};

const ARROW: &str = "->";

/// Turns one segment-line value into a [`Segment`].
///
/// Implemented by [`SegmentParser`]; the reservation builder is generic
/// over it so tests can substitute canned results.
pub trait ParseSegment {
    fn parse(&self, text: &str, line_number: usize) -> Result<Segment, ParseError>;
}

/// Parser for the three segment grammars:
///
/// ```text
/// Flight <IATA> <YYYY-MM-DD> <HH:MM> -> <IATA> <HH:MM>
/// Train <IATA> <YYYY-MM-DD> <HH:MM> -> <IATA> <HH:MM>
/// Hotel <IATA> <YYYY-MM-DD> -> <YYYY-MM-DD>
/// ```
///
/// Keywords are case-insensitive, codes must be uppercase. Wall-clock
/// values are interpreted in the context's time zone. Both ends of a
/// flight or train share one date, so overnight journeys cannot be
/// written.
///
/// # Examples
///
/// ```
/// use itinerary::Context;
/// use itinerary::parsing::{ParseSegment, SegmentParser};
///
/// let ctx = Context::new("MAD", Some("Europe/Madrid")).unwrap();
/// let parser = SegmentParser::new(&ctx);
///
/// let seg = parser.parse("Flight MAD 2026-01-01 10:00 -> BCN 12:00", 2).unwrap();
/// assert_eq!(seg.departure_at().to_rfc3339(), "2026-01-01T10:00:00+01:00");
/// assert_eq!(seg.destination().unwrap().as_str(), "BCN");
///
/// assert!(parser.parse("Boat MAD 2026-01-01 10:00 -> BCN 12:00", 3).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SegmentParser<'a> {
    context: &'a Context,
}

impl<'a> SegmentParser<'a> {
    pub fn new(context: &'a Context) -> Self {
        Self { context }
    }

    fn time_zone(&self) -> Tz {
        self.context.time_zone()
    }
}

impl ParseSegment for SegmentParser<'_> {
    fn parse(&self, text: &str, line_number: usize) -> Result<Segment, ParseError> {
        let line = Line {
            text,
            number: line_number,
            tz: self.time_zone(),
        };

        let tokens: Vec<&str> = text.split_whitespace().collect();
        let Some((keyword, fields)) = tokens.split_first() else {
            return Err(line.unknown_type());
        };

        match keyword.to_ascii_lowercase().as_str() {
            "flight" => line.moving(SegmentKind::Flight, fields),
            "train" => line.moving(SegmentKind::Train, fields),
            "hotel" => line.hotel(fields),
            _ => Err(line.unknown_type()),
        }
    }
}

/// One segment line being parsed.
struct Line<'t> {
    text: &'t str,
    number: usize,
    tz: Tz,
}

impl Line<'_> {
    /// `<IATA> <DATE> <HH:MM> -> <IATA> <HH:MM>`
    fn moving(&self, kind: SegmentKind, fields: &[&str]) -> Result<Segment, ParseError> {
        let &[origin, date, departs, arrow, destination, arrives] = fields else {
            return Err(self.malformed(kind));
        };
        if arrow != ARROW {
            return Err(self.malformed(kind));
        }

        let origin = self.code(kind, origin)?;
        let destination = self.code(kind, destination)?;
        let date = self.field(kind, date, parse_date)?;
        let departure_at = self.instant(date, self.field(kind, departs, parse_hhmm)?)?;
        let arrival_at = self.instant(date, self.field(kind, arrives, parse_hhmm)?)?;

        let segment = match kind {
            SegmentKind::Train => {
                Segment::train(origin, destination, departure_at, arrival_at, self.number)
            }
            _ => Segment::flight(origin, destination, departure_at, arrival_at, self.number),
        };
        segment.map_err(|source| self.invalid_segment(source))
    }

    /// `<IATA> <DATE> -> <DATE>`
    fn hotel(&self, fields: &[&str]) -> Result<Segment, ParseError> {
        let kind = SegmentKind::Hotel;
        let &[location, check_in, arrow, check_out] = fields else {
            return Err(self.malformed(kind));
        };
        if arrow != ARROW {
            return Err(self.malformed(kind));
        }

        let location = self.code(kind, location)?;
        let check_in_on = self.field(kind, check_in, parse_date)?;
        let check_out_on = self.field(kind, check_out, parse_date)?;

        Segment::hotel(location, check_in_on, check_out_on, self.tz, self.number)
            .map_err(|source| self.invalid_segment(source))
    }

    fn code(&self, kind: SegmentKind, s: &str) -> Result<Iata, ParseError> {
        Iata::parse(s).map_err(|source| ParseError::InvalidCode {
            line: self.number,
            kind,
            source,
        })
    }

    fn field<T>(
        &self,
        kind: SegmentKind,
        s: &str,
        parse: fn(&str) -> Result<T, FieldError>,
    ) -> Result<T, ParseError> {
        parse(s).map_err(|source| ParseError::InvalidField {
            line: self.number,
            kind,
            text: s.to_string(),
            source,
        })
    }

    fn instant(&self, date: NaiveDate, time: NaiveTime) -> Result<DateTime<Tz>, ParseError> {
        let local = date.and_time(time);
        localize(self.tz, local).ok_or_else(|| {
            self.invalid_segment(DomainError::NonexistentLocalTime(
                local.format("%Y-%m-%d %H:%M").to_string(),
            ))
        })
    }

    fn unknown_type(&self) -> ParseError {
        ParseError::UnknownType {
            line: self.number,
            text: self.text.to_string(),
        }
    }

    fn malformed(&self, kind: SegmentKind) -> ParseError {
        ParseError::Malformed {
            line: self.number,
            kind,
            text: self.text.to_string(),
        }
    }

    fn invalid_segment(&self, source: DomainError) -> ParseError {
        ParseError::Segment {
            line: self.number,
            source,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn context() -> Context {
        Context::new("MAD", Some("UTC")).unwrap()
    }

    proptest! {
        /// Parsing then re-serialising the four route fields is lossless
        #[test]
        fn route_fields_roundtrip(
            origin in "[A-Z]{3}",
            destination in "[A-Z]{3}",
            day in 1u32..=28,
            dep in 0u32..1440,
            len in 0u32..1440,
            train in any::<bool>(),
        ) {
            let arr = (dep + len).min(1439);
            let keyword = if train { "Train" } else { "Flight" };
            let date = format!("2026-03-{day:02}");
            let dep_s = format!("{:02}:{:02}", dep / 60, dep % 60);
            let arr_s = format!("{:02}:{:02}", arr / 60, arr % 60);
            let text = format!("{keyword} {origin} {date} {dep_s} -> {destination} {arr_s}");

            let ctx = context();
            let seg = SegmentParser::new(&ctx).parse(&text, 1).unwrap();
            let route = seg.route().unwrap();

            let rebuilt = format!(
                "{keyword} {} {} {} -> {} {}",
                route.origin,
                seg.departure_at().format("%Y-%m-%d"),
                seg.departure_at().format("%H:%M"),
                route.destination,
                seg.arrival_at().format("%H:%M"),
            );
            prop_assert_eq!(rebuilt, text);
        }
    }
}
