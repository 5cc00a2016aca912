//! Time and timestamp helpers.

use chrono::{DateTime, Local};

/// Local timestamp used when stamping new entries.
pub type Timestamp = DateTime<Local>;

/// Strftime pattern for the human-readable entry timestamp,
/// e.g. "Monday, January 02, 2006 at 03:04 PM".
const TIMESTAMP_FORMAT: &str = "%A, %B %d, %Y at %I:%M %p";

/// Return the current local time.
#[must_use]
pub fn now() -> Timestamp {
    Local::now()
}

/// Render `at` in the human-readable journal format.
#[must_use]
pub fn format_timestamp(at: Timestamp) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Render `at` as an ISO-8601 (RFC 3339) datetime string.
#[must_use]
pub fn iso_date(at: Timestamp) -> String {
    at.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_return_current_local_time() {
        let before = Local::now();
        let ts = now();
        let after = Local::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_format_timestamp_in_journal_style() {
        let at = Local.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(format_timestamp(at), "Monday, January 02, 2006 at 03:04 PM");
    }

    #[test]
    fn should_format_morning_hours_with_am_marker() {
        let at = Local.with_ymd_and_hms(2006, 1, 3, 9, 30, 0).unwrap();
        assert_eq!(format_timestamp(at), "Tuesday, January 03, 2006 at 09:30 AM");
    }

    #[test]
    fn should_produce_parseable_iso_date() {
        let at = now();
        let rendered = iso_date(at);
        let parsed = DateTime::parse_from_rfc3339(&rendered).unwrap();
        assert_eq!(parsed.timestamp(), at.timestamp());
    }
}
