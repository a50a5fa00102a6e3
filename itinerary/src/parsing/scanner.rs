//! Line scanner.
//!
//! Splits text into trimmed, non-blank lines and classifies each one.
//! Scanning is lazy: statements are produced one at a time from a cursor
//! over the input, and every call to [`Scanner::statements`] starts again
//! from the first line.

use std::io::Read;
use std::iter::Enumerate;
use std::str::Lines;

use super::{ScanError, Statement, StatementKind};

const RESERVATION_START: &str = "RESERVATION";
const SEGMENT_PREFIX: &str = "SEGMENT:";

/// Statement scanner over borrowed text.
///
/// # Examples
///
/// ```
/// use itinerary::parsing::{Scanner, StatementKind};
///
/// let text = "RESERVATION\n\nSEGMENT: Hotel BCN 2026-01-01 -> 2026-01-02\nfoo";
/// let scanner = Scanner::new(text);
///
/// let statements: Vec<_> = scanner.statements().collect();
/// assert_eq!(statements.len(), 3);
/// assert_eq!(statements[0].kind, StatementKind::ReservationStart);
/// assert_eq!(statements[1].line_number, 3);
/// assert_eq!(statements[2].kind, StatementKind::Unknown("foo"));
///
/// // Restartable
/// assert_eq!(scanner.statements().count(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    input: &'a str,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// A fresh statement sequence starting at line 1.
    pub fn statements(&self) -> Statements<'a> {
        Statements {
            lines: self.input.lines().enumerate(),
        }
    }
}

impl<'a> IntoIterator for &Scanner<'a> {
    type Item = Statement<'a>;
    type IntoIter = Statements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements()
    }
}

/// Lazy sequence of statements; see [`Scanner::statements`].
#[derive(Debug, Clone)]
pub struct Statements<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> Iterator for Statements<'a> {
    type Item = Statement<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, raw) in self.lines.by_ref() {
            let content = raw.trim();
            if content.is_empty() {
                continue;
            }
            return Some(Statement {
                kind: classify(content),
                line_number: index + 1,
                raw,
            });
        }
        None
    }
}

/// Classify a trimmed, non-empty line.
fn classify(content: &str) -> StatementKind<'_> {
    if content.eq_ignore_ascii_case(RESERVATION_START) {
        return StatementKind::ReservationStart;
    }

    let has_prefix = content
        .get(..SEGMENT_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(SEGMENT_PREFIX));
    if has_prefix {
        // The keyword must be followed by whitespace: `SEGMENT:Flight` is unknown.
        let rest = &content[SEGMENT_PREFIX.len()..];
        let value = rest.trim();
        if rest.starts_with(char::is_whitespace) && !value.is_empty() {
            return StatementKind::SegmentLine(value);
        }
    }

    StatementKind::Unknown(content)
}

/// Read a whole text source into memory for scanning.
///
/// # Errors
///
/// Returns `ScanError::InvalidInput` if the source is not UTF-8 text.
pub fn read_input<R: Read>(mut reader: R) -> Result<String, ScanError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    String::from_utf8(bytes).map_err(|_| ScanError::InvalidInput("not UTF-8 text".into()))
}
