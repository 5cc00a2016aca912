//! Aggregate statistics derived from the entry list.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// Longest streak the placeholder metric will report.
pub const STREAK_CAP: usize = 7;

/// Aggregate figures for the stored journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Total number of stored entries.
    pub total_entries: usize,
    /// Entries whose creation date falls on the reference day.
    pub today_entries: usize,
    /// Placeholder streak metric: the total count capped at [`STREAK_CAP`].
    /// Not a true consecutive-day computation.
    pub streak_days: usize,
}

impl Stats {
    /// Compute statistics for `entries` relative to `today`.
    ///
    /// Entries whose `date` field does not parse as RFC 3339 count towards
    /// the total but never towards today's figure.
    #[must_use]
    pub fn compute(entries: &[Entry], today: NaiveDate) -> Self {
        let total_entries = entries.len();
        let today_entries = entries
            .iter()
            .filter_map(|entry| DateTime::parse_from_rfc3339(&entry.date).ok())
            .filter(|date| date.date_naive() == today)
            .count();

        Self {
            total_entries,
            today_entries,
            streak_days: total_entries.min(STREAK_CAP),
        }
    }
}
