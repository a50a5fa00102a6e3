//! Scanned statements.

use std::fmt;

/// What a line says.
///
/// Reservation starts carry no value and segment lines always carry a
/// non-empty one, so neither invariant needs checking at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind<'a> {
    /// `RESERVATION`
    ReservationStart,
    /// `SEGMENT: <value>`
    SegmentLine(&'a str),
    /// Anything else; carries the trimmed line
    Unknown(&'a str),
}

/// One classified, non-blank input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement<'a> {
    pub kind: StatementKind<'a>,
    /// 1-indexed, counting blank lines
    pub line_number: usize,
    /// The line as it appeared in the input
    pub raw: &'a str,
}

impl<'a> Statement<'a> {
    /// The statement's value: the segment text or the unknown line.
    pub fn value(&self) -> Option<&'a str> {
        match self.kind {
            StatementKind::ReservationStart => None,
            StatementKind::SegmentLine(value) | StatementKind::Unknown(value) => Some(value),
        }
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            StatementKind::ReservationStart => "reservation_start",
            StatementKind::SegmentLine(_) => "segment_line",
            StatementKind::Unknown(_) => "unknown",
        };
        write!(f, "line {} ({kind})", self.line_number)?;
        if let Some(value) = self.value() {
            write!(f, ": {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_per_kind() {
        let start = Statement {
            kind: StatementKind::ReservationStart,
            line_number: 1,
            raw: "RESERVATION",
        };
        assert_eq!(start.value(), None);

        let segment = Statement {
            kind: StatementKind::SegmentLine("Hotel BCN 2026-01-01 -> 2026-01-02"),
            line_number: 2,
            raw: "SEGMENT: Hotel BCN 2026-01-01 -> 2026-01-02",
        };
        assert_eq!(segment.value(), Some("Hotel BCN 2026-01-01 -> 2026-01-02"));

        let unknown = Statement {
            kind: StatementKind::Unknown("foo bar"),
            line_number: 3,
            raw: "  foo bar",
        };
        assert_eq!(unknown.value(), Some("foo bar"));
    }

    #[test]
    fn display() {
        let unknown = Statement {
            kind: StatementKind::Unknown("foo"),
            line_number: 5,
            raw: "foo",
        };
        assert_eq!(unknown.to_string(), "line 5 (unknown): foo");

        let start = Statement {
            kind: StatementKind::ReservationStart,
            line_number: 1,
            raw: "RESERVATION",
        };
        assert_eq!(start.to_string(), "line 1 (reservation_start)");
    }
}
