//! Location code types.

use std::fmt;

/// Error returned when parsing an invalid IATA code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA code {code:?}: {reason}")]
pub struct InvalidIata {
    code: String,
    reason: &'static str,
}

impl InvalidIata {
    /// The rejected input.
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// A 3-letter IATA location code (airport, station or city).
///
/// Codes are always 3 uppercase ASCII letters. Whether the code names a
/// real place is not checked here; that belongs to a
/// [`LocationResolver`](crate::locations::LocationResolver).
///
/// # Examples
///
/// ```
/// use itinerary::domain::Iata;
///
/// let mad = Iata::parse("MAD").unwrap();
/// assert_eq!(mad.as_str(), "MAD");
///
/// // Lowercase is rejected
/// assert!(Iata::parse("mad").is_err());
///
/// // Wrong length is rejected
/// assert!(Iata::parse("MA").is_err());
/// assert!(Iata::parse("MADR").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iata([u8; 3]);

impl Iata {
    /// Parse an IATA code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidIata> {
        let invalid = |reason| InvalidIata {
            code: s.to_string(),
            reason,
        };

        let bytes = s.as_bytes();
        if bytes.len() != 3 {
            return Err(invalid("must be exactly 3 characters"));
        }
        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(invalid("must be uppercase ASCII letters A-Z"));
        }

        Ok(Iata([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl std::str::FromStr for Iata {
    type Err = InvalidIata;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iata({})", self.as_str())
    }
}

impl fmt::Display for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(Iata::parse("MAD").is_ok());
        assert!(Iata::parse("BCN").is_ok());
        assert!(Iata::parse("AAA").is_ok());
        assert!(Iata::parse("ZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(Iata::parse("mad").is_err());
        assert!(Iata::parse("Mad").is_err());
        assert!(Iata::parse("MAd").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(Iata::parse("").is_err());
        assert!(Iata::parse("M").is_err());
        assert!(Iata::parse("MA").is_err());
        assert!(Iata::parse("MADR").is_err());
        assert!(Iata::parse("MADRID").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(Iata::parse("M1D").is_err());
        assert!(Iata::parse("M-D").is_err());
        assert!(Iata::parse("M D").is_err());
        assert!(Iata::parse("MÖD").is_err());
    }

    #[test]
    fn error_names_the_input() {
        let err = Iata::parse("MADRID").unwrap_err();
        assert_eq!(err.code(), "MADRID");
        assert_eq!(
            err.to_string(),
            "invalid IATA code \"MADRID\": must be exactly 3 characters"
        );
    }

    #[test]
    fn display_and_debug() {
        let iata = Iata::parse("AMS").unwrap();
        assert_eq!(format!("{}", iata), "AMS");
        assert_eq!(format!("{:?}", iata), "Iata(AMS)");
    }

    #[test]
    fn from_str() {
        let iata: Iata = "LHR".parse().unwrap();
        assert_eq!(iata, Iata::parse("LHR").unwrap());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z]{3}") {
            let iata = Iata::parse(&s).unwrap();
            prop_assert_eq!(iata.as_str(), s.as_str());
        }

        /// Lowercase letters are always rejected
        #[test]
        fn lowercase_rejected(s in "[a-z]{3}") {
            prop_assert!(Iata::parse(&s).is_err());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(Iata::parse(&s).is_err());
        }
    }
}
