//! Input validators for event fields.
//!
//! Callers receive a plain boolean; nothing here panics or propagates an
//! error.

use chrono::{NaiveDate, NaiveTime};

use crate::constants::{DATE_FORMAT, TIME_FORMAT};

/// True iff `s` parses exactly as YYYY-MM-DD.
pub fn validate_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok()
}

/// True iff `s` parses exactly as HH:MM (24-hour clock).
pub fn validate_time(s: &str) -> bool {
    NaiveTime::parse_from_str(s, TIME_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_dates() {
        assert!(validate_date("2024-01-01"));
        assert!(validate_date("2099-12-31"));
        assert!(validate_date("2024-02-29")); // leap day
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(!validate_date(""));
        assert!(!validate_date("2024/01/01"));
        assert!(!validate_date("2024-13-01"));
        assert!(!validate_date("2023-02-29"));
        assert!(!validate_date("01-01-2024"));
        assert!(!validate_date("2024-01-01 extra"));
    }

    #[test]
    fn accepts_well_formed_times() {
        assert!(validate_time("00:00"));
        assert!(validate_time("09:00"));
        assert!(validate_time("23:59"));
    }

    #[test]
    fn rejects_malformed_times() {
        assert!(!validate_time(""));
        assert!(!validate_time("24:00"));
        assert!(!validate_time("12:60"));
        assert!(!validate_time("9h30"));
        assert!(!validate_time("09:00:00"));
        assert!(!validate_time("noon"));
    }
}
