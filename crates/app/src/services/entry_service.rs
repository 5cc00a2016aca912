//! Entry service — use-cases for the journal.

use minijournal_domain::entry::Entry;
use minijournal_domain::error::{MiniJournalError, ValidationError};
use minijournal_domain::id::EntryId;
use minijournal_domain::stats::Stats;
use minijournal_domain::time;

use crate::ports::EntryRepository;

/// Caller-supplied data for a new entry, prior to validation.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub name: String,
    pub message: String,
}

/// Application service for journal operations.
///
/// Every operation re-reads the backing store and mutations rewrite it
/// entirely; nothing is cached between calls.
pub struct EntryService<R> {
    repo: R,
}

impl<R: EntryRepository> EntryService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_entries(&self) -> Result<Vec<Entry>, MiniJournalError> {
        self.repo.load().await
    }

    /// Create a new entry and persist the extended list.
    ///
    /// The entry is assigned `current count + 1` as its id, stamped with the
    /// current time, and prepended so the list stays newest-first. Ids of
    /// deleted entries are not retired, so after a deletion a new id can
    /// collide with a surviving entry.
    ///
    /// # Errors
    ///
    /// Returns [`MiniJournalError::Validation`] when `name` or `message` is
    /// blank after trimming (nothing is persisted in that case), or a
    /// storage error when the write fails.
    pub async fn create_entry(&self, draft: NewEntry) -> Result<Entry, MiniJournalError> {
        if draft.name.trim().is_empty() || draft.message.trim().is_empty() {
            return Err(ValidationError::MissingFields.into());
        }

        let mut entries = self.repo.load().await?;

        let entry = Entry::builder()
            .id(EntryId::from_count(entries.len()))
            .name(draft.name)
            .message(draft.message)
            .build()?;

        entries.insert(0, entry.clone());
        self.repo.save(&entries).await?;

        tracing::debug!(id = %entry.id, "entry created");
        Ok(entry)
    }

    /// Delete the entry with the given id.
    ///
    /// Filtering an id that does not exist still succeeds and leaves the
    /// stored list unchanged.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the rewrite fails.
    pub async fn delete_entry(&self, id: EntryId) -> Result<(), MiniJournalError> {
        let mut entries = self.repo.load().await?;
        entries.retain(|entry| entry.id != id);
        self.repo.save(&entries).await?;

        tracing::debug!(%id, "entry deleted");
        Ok(())
    }

    /// Compute aggregate statistics for the stored journal.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn stats(&self) -> Result<Stats, MiniJournalError> {
        let entries = self.repo.load().await?;
        Ok(Stats::compute(&entries, time::now().date_naive()))
    }

    /// Write two sample entries when the backing store has not been created
    /// yet.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the write fails.
    pub async fn seed_if_missing(&self) -> Result<(), MiniJournalError> {
        if self.repo.exists().await {
            return Ok(());
        }

        let samples = sample_entries()?;
        self.repo.save(&samples).await?;

        tracing::info!(count = samples.len(), "seeded sample entries");
        Ok(())
    }
}

fn sample_entries() -> Result<Vec<Entry>, MiniJournalError> {
    Ok(vec![
        Entry::builder()
            .id(EntryId::new(1))
            .name("Alex Johnson")
            .message(
                "Today I choose to focus on progress, not perfection. \
                 Every small step forward is a victory worth celebrating.",
            )
            .build()?,
        Entry::builder()
            .id(EntryId::new(2))
            .name("Sarah Chen")
            .message(
                "Gratitude transforms what we have into enough. \
                 Today I'm grateful for the opportunity to grow and learn.",
            )
            .build()?,
    ])
}
