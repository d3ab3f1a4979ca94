//! Reservation record type and field validation

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use crate::store::StoreError;

/// Timestamp pattern used on disk and at every prompt: MM-DD-YYYY HH:MM, 24-hour clock.
pub const TIME_FORMAT: &str = "%m-%d-%Y %H:%M";

/// A single reservation. Records carry no identity field; they are
/// distinguished by their values and their position in the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    pub name: String,
    pub party_size: u32,
    #[serde(serialize_with = "serialize_time")]
    pub reservation_time: NaiveDateTime,
}

impl Reservation {
    /// The timestamp rendered in the fixed pattern.
    pub fn time_display(&self) -> String {
        self.reservation_time.format(TIME_FORMAT).to_string()
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Party Size: {}, Time: {}",
            self.name,
            self.party_size,
            self.reservation_time.format(TIME_FORMAT)
        )
    }
}

fn serialize_time<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
}

/// Parse a party size entered as free text. Must be a positive whole number.
pub fn parse_party_size(input: &str) -> Result<u32, StoreError> {
    match input.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(StoreError::InvalidPartySize(input.trim().to_string())),
    }
}

/// Parse a reservation time entered as free text against [`TIME_FORMAT`].
pub fn parse_reservation_time(input: &str) -> Result<NaiveDateTime, StoreError> {
    NaiveDateTime::parse_from_str(input.trim(), TIME_FORMAT)
        .map_err(|_| StoreError::InvalidTime(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_party_size_accepts_positive() {
        assert_eq!(parse_party_size("4").unwrap(), 4);
        assert_eq!(parse_party_size(" 12 ").unwrap(), 12);
    }

    #[test]
    fn test_parse_party_size_rejects_zero_negative_and_garbage() {
        assert!(matches!(
            parse_party_size("0"),
            Err(StoreError::InvalidPartySize(_))
        ));
        assert!(matches!(
            parse_party_size("-3"),
            Err(StoreError::InvalidPartySize(_))
        ));
        assert!(matches!(
            parse_party_size("four"),
            Err(StoreError::InvalidPartySize(_))
        ));
        assert!(matches!(
            parse_party_size(""),
            Err(StoreError::InvalidPartySize(_))
        ));
    }

    #[test]
    fn test_parse_reservation_time_accepts_fixed_pattern() {
        let time = parse_reservation_time("03-01-2025 18:00").unwrap();
        assert_eq!(time.format(TIME_FORMAT).to_string(), "03-01-2025 18:00");
    }

    #[test]
    fn test_parse_reservation_time_rejects_other_patterns() {
        for input in ["2025-03-01 18:00", "03-01-2025", "18:00", "03/01/2025 18:00"] {
            assert!(
                matches!(parse_reservation_time(input), Err(StoreError::InvalidTime(_))),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_display_matches_listing_format() {
        let reservation = Reservation {
            name: "Alice".into(),
            party_size: 4,
            reservation_time: parse_reservation_time("03-01-2025 18:00").unwrap(),
        };
        assert_eq!(
            reservation.to_string(),
            "Alice, Party Size: 4, Time: 03-01-2025 18:00"
        );
    }
}
