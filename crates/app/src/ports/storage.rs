//! Storage port — the repository trait for persistence.

use std::future::Future;

use minijournal_domain::entry::Entry;
use minijournal_domain::error::MiniJournalError;

/// Durable mapping between the in-memory entry list and a backing store.
///
/// The journal is small enough to treat as one document: `load` returns the
/// full newest-first list and `save` rewrites it entirely. There is no
/// locking — concurrent saves race and the last writer wins.
pub trait EntryRepository {
    /// Load the full entry list, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`MiniJournalError::Storage`] when the backing store fails in
    /// a way it cannot degrade from. The file-backed implementation treats a
    /// missing or unparseable store as an empty list instead of an error.
    fn load(&self) -> impl Future<Output = Result<Vec<Entry>, MiniJournalError>> + Send;

    /// Overwrite the backing store with `entries`.
    ///
    /// # Errors
    ///
    /// Returns [`MiniJournalError::Storage`] when the write fails.
    fn save(
        &self,
        entries: &[Entry],
    ) -> impl Future<Output = Result<(), MiniJournalError>> + Send;

    /// Whether the backing store has been created yet.
    ///
    /// Used by the composition root to decide if first-run sample data
    /// should be written.
    fn exists(&self) -> impl Future<Output = bool> + Send;
}
