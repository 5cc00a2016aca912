//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`MiniJournalError`] via `#[from]` or a boxed source (no `String`
//! variants).

use std::error::Error;

/// Top-level error for all journal operations.
#[derive(Debug, thiserror::Error)]
pub enum MiniJournalError {
    /// Caller input violated a domain invariant.
    #[error("Validation error")]
    Validation(#[from] ValidationError),

    /// The backing store failed to persist the entry list.
    #[error("Storage error")]
    Storage(#[source] Box<dyn Error + Send + Sync>),
}

/// Validation failures for caller-supplied entry data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `name` or `message` is missing or blank after trimming.
    #[error("Name and message are required")]
    MissingFields,
}
