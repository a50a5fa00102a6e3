//! Line-based itinerary parsing.
//!
//! Text is scanned into [`Statement`]s, one per non-blank line, and segment
//! lines are parsed into domain [`Segment`](crate::domain::Segment)s:
//!
//! ```text
//! RESERVATION
//! SEGMENT: Flight <IATA> <YYYY-MM-DD> <HH:MM> -> <IATA> <HH:MM>
//! SEGMENT: Train <IATA> <YYYY-MM-DD> <HH:MM> -> <IATA> <HH:MM>
//! SEGMENT: Hotel <IATA> <YYYY-MM-DD> -> <YYYY-MM-DD>
//! ```

mod error;
mod fields;
mod scanner;
mod segment_parser;
mod statement;

pub use error::{FieldError, ParseError, ScanError};
pub use fields::{parse_date, parse_hhmm};
pub use scanner::{Scanner, Statements, read_input};
pub use segment_parser::{ParseSegment, SegmentParser};
pub use statement::{Statement, StatementKind};
