//! Live status derivation.
//!
//! Status is recomputed from the current instant on every display and never
//! read back from the store.

use chrono::NaiveDateTime;

use crate::constants::DATETIME_FORMAT;
use crate::event::EventStatus;

/// Classify a date + time pair against `now`.
///
/// `Upcoming` iff the combined instant is not before `now`, `Overdue` iff
/// strictly before, `Unknown` when either field fails to parse. `now` is an
/// explicit parameter so callers (and tests) control the clock.
pub fn status_at(date: &str, time: &str, now: NaiveDateTime) -> EventStatus {
    let combined = format!("{} {}", date, time);
    match NaiveDateTime::parse_from_str(&combined, DATETIME_FORMAT) {
        Ok(instant) if instant < now => EventStatus::Overdue,
        Ok(_) => EventStatus::Upcoming,
        Err(_) => EventStatus::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn future_instant_is_upcoming() {
        let now = at(2026, 8, 6, 12, 0);
        assert_eq!(status_at("2026-08-06", "12:01", now), EventStatus::Upcoming);
        assert_eq!(status_at("2099-01-01", "09:00", now), EventStatus::Upcoming);
    }

    #[test]
    fn the_exact_instant_is_upcoming() {
        let now = at(2026, 8, 6, 12, 0);
        assert_eq!(status_at("2026-08-06", "12:00", now), EventStatus::Upcoming);
    }

    #[test]
    fn past_instant_is_overdue() {
        let now = at(2026, 8, 6, 12, 0);
        assert_eq!(status_at("2026-08-06", "11:59", now), EventStatus::Overdue);
        assert_eq!(status_at("1999-12-31", "23:59", now), EventStatus::Overdue);
    }

    #[test]
    fn unparseable_fields_are_unknown() {
        let now = at(2026, 8, 6, 12, 0);
        assert_eq!(status_at("", "", now), EventStatus::Unknown);
        assert_eq!(status_at("2026-08-06", "late", now), EventStatus::Unknown);
        assert_eq!(status_at("soon", "12:00", now), EventStatus::Unknown);
        assert_eq!(status_at("2026-13-06", "12:00", now), EventStatus::Unknown);
    }

    #[test]
    fn status_is_a_pure_function_of_its_inputs() {
        // Same inputs, same answer; a different clock flips it.
        let before = at(2026, 8, 6, 8, 0);
        let after = at(2026, 8, 6, 10, 0);
        assert_eq!(status_at("2026-08-06", "09:00", before), EventStatus::Upcoming);
        assert_eq!(status_at("2026-08-06", "09:00", before), EventStatus::Upcoming);
        assert_eq!(status_at("2026-08-06", "09:00", after), EventStatus::Overdue);
    }
}
