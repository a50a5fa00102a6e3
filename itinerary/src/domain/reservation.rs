//! Reservation type.

use super::{DomainError, Segment};

/// A `RESERVATION` block and the segments parsed beneath it.
///
/// Reservations are informational: the trip builder only sees the
/// flattened segment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    start_line_number: usize,
    segments: Vec<Segment>,
}

impl Reservation {
    pub fn new(start_line_number: usize) -> Self {
        Self {
            start_line_number,
            segments: Vec::new(),
        }
    }

    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn start_line_number(&self) -> usize {
        self.start_line_number
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// A reservation must contain at least one segment.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.segments.is_empty() {
            return Err(DomainError::EmptyReservation(self.start_line_number));
        }
        Ok(())
    }
}
