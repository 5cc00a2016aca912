//! Typed identifier for journal entries.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for an [`Entry`](crate::entry::Entry).
///
/// Ids are small 1-based integers assigned from the current entry count at
/// creation time. Ids of deleted entries are not retired, so the stored
/// sequence may become non-contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl Default for EntryId {
    /// The id a fresh, empty journal assigns to its first entry.
    fn default() -> Self {
        Self(1)
    }
}

impl EntryId {
    /// Wrap a raw integer id.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Id assigned to a new entry when the store currently holds `count`
    /// entries.
    #[must_use]
    pub fn from_count(count: usize) -> Self {
        Self(count as u64 + 1)
    }

    /// Access the raw integer.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for EntryId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
