/// Calendar-day utilities
///
/// Every date in the engine is a calendar day in the user's local calendar,
/// with no time-of-day component. All conversions from timestamps go through
/// this module so the same instant can never map to two different day values
/// in different parts of the codebase.

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::domain::DomainError;

/// Convert a timestamp to its local calendar day
///
/// Strips the time-of-day component after shifting the instant into the
/// local wall-clock timezone. This is the only sanctioned way to derive a
/// day from a timestamp.
pub fn to_calendar_day(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

/// Signed day difference `a - b`
///
/// Two days are adjacent iff `days_between(later, earlier) == 1`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days()
}

/// The current local calendar day
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` day string
///
/// Malformed input fails fast here with a descriptive error rather than
/// being coerced into a default that could produce a misleading streak.
pub fn parse_day(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DomainError::InvalidDate(format!("'{}' is not a valid YYYY-MM-DD day: {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_days_between_signed() {
        let a = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

        assert_eq!(days_between(a, b), 3);
        assert_eq!(days_between(b, a), -3);
        assert_eq!(days_between(a, a), 0);
    }

    #[test]
    fn test_adjacency() {
        let a = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(); // leap year

        assert_eq!(days_between(a, b), 1);
    }

    #[test]
    fn test_parse_valid_day() {
        let day = parse_day("2024-07-04").unwrap();
        assert_eq!(day, NaiveDate::from_ymd_opt(2024, 7, 4).unwrap());
    }

    #[test]
    fn test_parse_malformed_day() {
        assert!(parse_day("07/04/2024").is_err());
        assert!(parse_day("2024-13-01").is_err());
        assert!(parse_day("not a date").is_err());
    }

    #[test]
    fn test_to_calendar_day_strips_time() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let day = to_calendar_day(ts);

        // Noon UTC lands on the 14th, 15th, or 16th locally depending on
        // offset, but converting the same instant twice must agree.
        assert_eq!(day, to_calendar_day(ts));
        assert!(days_between(day, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()).abs() <= 1);
    }
}
