//! Pipeline diagnostics.
//!
//! Problems found while building an itinerary do not abort the run. Each
//! stage returns its value together with the diagnostics it produced, and
//! the caller merges them in processing order.

use std::fmt;

/// How bad a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Processing continued past this problem
    Recoverable,
    /// Trip building stopped here
    Fatal,
}

/// A human-readable problem report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub line_number: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn recoverable(line_number: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Recoverable,
            line_number,
            message: message.into(),
        }
    }

    pub fn fatal(line_number: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Fatal,
            line_number,
            message: message.into(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A stage result: the value built so far plus everything that went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Outcome<T> {
    pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// True iff no diagnostics were produced.
    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_fatal(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_fatal)
    }

    /// Feed the value into the next stage, keeping earlier diagnostics first.
    pub fn and_then<U>(self, next: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        let Outcome {
            value,
            mut diagnostics,
        } = next(self.value);
        let mut merged = self.diagnostics;
        merged.append(&mut diagnostics);
        Outcome::new(value, merged)
    }

    /// Diagnostic messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}
