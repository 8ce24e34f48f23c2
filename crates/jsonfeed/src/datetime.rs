// ABOUTME: Strict ISO 8601 parsing for JSON Feed dates.
// ABOUTME: Wraps chrono's RFC 3339 parser; the publisher's offset is kept as-is.

use chrono::{DateTime, FixedOffset};

/// Parses an ISO 8601 datetime string with a numeric timezone offset
/// (or `Z`). Returns `None` for anything else: no lenient fallbacks, no
/// naive datetimes, no named timezones.
pub fn parse_iso8601(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(s).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_datetime() {
        let dt = parse_iso8601("2017-05-17T08:02:12-07:00").unwrap();
        assert_eq!(dt.timestamp(), 1495033332);
        assert_eq!(dt.offset().local_minus_utc(), -7 * 3600);
    }

    #[test]
    fn test_utc_z_suffix() {
        let dt = parse_iso8601("2023-06-15T14:30:00Z").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_fractional_seconds() {
        assert!(parse_iso8601("2023-06-15T14:30:00.250+02:00").is_some());
    }

    #[test]
    fn test_naive_datetime_rejected() {
        assert!(parse_iso8601("2023-06-15T14:30:00").is_none());
    }

    #[test]
    fn test_rfc2822_rejected() {
        assert!(parse_iso8601("Mon, 02 Jan 2006 15:04:05 -0700").is_none());
    }

    #[test]
    fn test_empty_returns_none() {
        assert!(parse_iso8601("").is_none());
        assert!(parse_iso8601("   ").is_none());
    }

    #[test]
    fn test_garbage_returns_none() {
        assert!(parse_iso8601("not a date").is_none());
    }
}
