//! Entry — one journal submission.

use serde::{Deserialize, Serialize};

use crate::error::{MiniJournalError, ValidationError};
use crate::id::EntryId;
use crate::time;

/// A single journal entry as submitted by a visitor.
///
/// Both timestamps are captured once, at creation, and stored as strings:
/// `timestamp` for display, `date` (RFC 3339) for the statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub message: String,
    /// Human-readable creation time, e.g. "Monday, January 02, 2006 at 03:04 PM".
    pub timestamp: String,
    /// Machine-readable creation time (ISO-8601).
    pub date: String,
}

impl Entry {
    /// Create a builder for constructing an [`Entry`].
    #[must_use]
    pub fn builder() -> EntryBuilder {
        EntryBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MiniJournalError::Validation`] when `name` or `message` is
    /// empty or whitespace-only.
    pub fn validate(&self) -> Result<(), MiniJournalError> {
        if self.name.trim().is_empty() || self.message.trim().is_empty() {
            return Err(ValidationError::MissingFields.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Entry`].
///
/// Trims `name` and `message` and stamps both creation times when built.
#[derive(Debug, Default)]
pub struct EntryBuilder {
    id: Option<EntryId>,
    name: Option<String>,
    message: Option<String>,
    created_at: Option<time::Timestamp>,
}

impl EntryBuilder {
    #[must_use]
    pub fn id(mut self, id: EntryId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Override the creation instant (defaults to the current local time).
    #[must_use]
    pub fn created_at(mut self, at: time::Timestamp) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Consume the builder, validate, and return an [`Entry`].
    ///
    /// # Errors
    ///
    /// Returns [`MiniJournalError::Validation`] if `name` or `message` is
    /// missing or blank after trimming.
    pub fn build(self) -> Result<Entry, MiniJournalError> {
        let created_at = self.created_at.unwrap_or_else(time::now);
        let entry = Entry {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default().trim().to_string(),
            message: self.message.unwrap_or_default().trim().to_string(),
            timestamp: time::format_timestamp(created_at),
            date: time::iso_date(created_at),
        };
        entry.validate()?;
        Ok(entry)
    }
}
