//! Storage-specific error type wrapping file IO errors.

use minijournal_domain::error::MiniJournalError;

/// Errors originating from the JSON-file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("file IO error")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the entry list to JSON.
    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for MiniJournalError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
