//! Parsing error types.

use crate::domain::{DomainError, InvalidIata, SegmentKind};

/// Error returned for a malformed date or time field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {reason}")]
pub struct FieldError {
    field: &'static str,
    reason: &'static str,
}

impl FieldError {
    pub(crate) fn date(reason: &'static str) -> Self {
        Self {
            field: "date",
            reason,
        }
    }

    pub(crate) fn time(reason: &'static str) -> Self {
        Self {
            field: "time",
            reason,
        }
    }
}

/// Failure to turn a segment line into a [`Segment`](crate::domain::Segment).
///
/// Every variant names the line, so the message alone identifies the
/// problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Leading keyword is not Flight, Train or Hotel
    #[error("Unknown segment type at line {line}: {text:?}")]
    UnknownType { line: usize, text: String },

    /// Line does not have the variant's fields
    #[error("Invalid {kind} segment line {line}: {text:?}")]
    Malformed {
        line: usize,
        kind: SegmentKind,
        text: String,
    },

    /// A location code is not 3 uppercase letters
    #[error("Invalid {kind} segment line {line}: {source}")]
    InvalidCode {
        line: usize,
        kind: SegmentKind,
        #[source]
        source: InvalidIata,
    },

    /// A date or time is not calendar-valid
    #[error("Invalid {kind} segment line {line}: {source} in {text:?}")]
    InvalidField {
        line: usize,
        kind: SegmentKind,
        text: String,
        #[source]
        source: FieldError,
    },

    /// The segment's own invariants rejected it
    #[error("Invalid segment line {line}: {source}")]
    Segment {
        line: usize,
        #[source]
        source: DomainError,
    },
}

impl ParseError {
    /// The line the error refers to.
    pub fn line_number(&self) -> usize {
        match self {
            ParseError::UnknownType { line, .. }
            | ParseError::Malformed { line, .. }
            | ParseError::InvalidCode { line, .. }
            | ParseError::InvalidField { line, .. }
            | ParseError::Segment { line, .. } => *line,
        }
    }
}

/// Errors from reading scanner input.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The source could not be read
    #[error("Input could not be read: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not text
    #[error("Input type not supported: {0}")]
    InvalidInput(String),
}
