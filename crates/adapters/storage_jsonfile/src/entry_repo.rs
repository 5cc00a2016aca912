//! JSON-file implementation of [`EntryRepository`].

use std::future::Future;
use std::path::{Path, PathBuf};

use minijournal_app::ports::EntryRepository;
use minijournal_domain::entry::Entry;
use minijournal_domain::error::MiniJournalError;

use crate::error::StorageError;

/// File-backed entry repository.
///
/// The whole journal lives in one pretty-printed JSON array. Every load
/// re-reads the file and every save rewrites it; there is no locking, so
/// concurrent writers race and the last one wins.
pub struct JsonFileEntryRepository {
    path: PathBuf,
}

impl JsonFileEntryRepository {
    /// Create a repository backed by the file at `path`.
    ///
    /// The file does not have to exist yet; it is created on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryRepository for JsonFileEntryRepository {
    /// Loads the journal, treating a missing, unreadable, or corrupt file
    /// as an empty list. The degraded cases are logged at `WARN` so they
    /// stay distinguishable from a genuinely empty journal.
    fn load(&self) -> impl Future<Output = Result<Vec<Entry>, MiniJournalError>> + Send {
        let path = self.path.clone();
        async move {
            let content = match tokio::fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    return Ok(Vec::new());
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "unreadable journal file, treating as empty"
                    );
                    return Ok(Vec::new());
                }
            };

            match serde_json::from_str(&content) {
                Ok(entries) => Ok(entries),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "corrupt journal file, treating as empty"
                    );
                    Ok(Vec::new())
                }
            }
        }
    }

    fn save(&self, entries: &[Entry]) -> impl Future<Output = Result<(), MiniJournalError>> + Send {
        let path = self.path.clone();
        // Pretty-printed with 2-space indentation; serde_json leaves
        // non-ASCII characters unescaped.
        let json = serde_json::to_string_pretty(entries).map_err(StorageError::from);
        async move {
            tokio::fs::write(&path, json?)
                .await
                .map_err(StorageError::from)?;
            Ok(())
        }
    }

    fn exists(&self) -> impl Future<Output = bool> + Send {
        let path = self.path.clone();
        async move { tokio::fs::try_exists(&path).await.unwrap_or(false) }
    }
}
