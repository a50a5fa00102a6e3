//! Reservation grouping.
//!
//! Groups segment lines under the `RESERVATION` line that precedes them,
//! parses each one, and collects every problem instead of stopping at the
//! first.

use tracing::{debug, trace};

use crate::diagnostics::{Diagnostic, Outcome};
use crate::domain::{Reservation, Segment};
use crate::parsing::{ParseSegment, Statement, StatementKind};

/// Everything the grouping pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reservations {
    /// Reservation blocks in input order, including invalid empty ones
    pub reservations: Vec<Reservation>,
    /// All successfully parsed segments, flattened, in input order
    pub segments: Vec<Segment>,
}

/// Fold state: the output so far and the open reservation, if any.
#[derive(Default)]
struct State {
    output: Reservations,
    current: Option<usize>,
    diagnostics: Vec<Diagnostic>,
}

/// Builds reservations from scanned statements.
#[derive(Debug, Clone)]
pub struct ReservationBuilder<P> {
    parser: P,
}

impl<P: ParseSegment> ReservationBuilder<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Consume the statements once, in order.
    ///
    /// Never fails: unknown lines, orphan segment lines, unparsable
    /// segments and empty reservations all become diagnostics.
    pub fn build<'a, I>(&self, statements: I) -> Outcome<Reservations>
    where
        I: IntoIterator<Item = Statement<'a>>,
    {
        let mut state = statements
            .into_iter()
            .fold(State::default(), |state, statement| self.step(state, statement));

        for reservation in &state.output.reservations {
            if let Err(err) = reservation.validate() {
                state.diagnostics.push(Diagnostic::recoverable(
                    Some(reservation.start_line_number()),
                    err.to_string(),
                ));
            }
        }

        debug!(
            reservations = state.output.reservations.len(),
            segments = state.output.segments.len(),
            problems = state.diagnostics.len(),
            "grouped reservations"
        );
        Outcome::new(state.output, state.diagnostics)
    }

    fn step(&self, mut state: State, statement: Statement<'_>) -> State {
        let line = statement.line_number;
        trace!(%statement, "statement");
        match statement.kind {
            StatementKind::ReservationStart => {
                state.output.reservations.push(Reservation::new(line));
                state.current = Some(state.output.reservations.len() - 1);
            }
            StatementKind::SegmentLine(text) => {
                let Some(index) = state.current else {
                    state.diagnostics.push(Diagnostic::recoverable(
                        Some(line),
                        format!("Segment line at line {line} must be part of a reservation"),
                    ));
                    return state;
                };

                match self.parser.parse(text, line) {
                    Ok(segment) => {
                        trace!(line, kind = %segment.kind(), "parsed segment");
                        state.output.reservations[index].add_segment(segment.clone());
                        state.output.segments.push(segment);
                    }
                    Err(err) => {
                        debug!(%statement, %err, "segment rejected");
                        state
                            .diagnostics
                            .push(Diagnostic::recoverable(Some(line), err.to_string()));
                    }
                }
            }
            StatementKind::Unknown(text) => {
                debug!(%statement, "unknown statement");
                state.diagnostics.push(Diagnostic::recoverable(
                    Some(line),
                    format!("Unknown statement at line {line}: {text}"),
                ));
            }
        }
        state
    }
}
