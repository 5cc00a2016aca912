//! # minijournal-adapter-storage-jsonfile
//!
//! Flat-file persistence adapter using [serde_json](https://docs.rs/serde_json).
//!
//! ## Responsibilities
//! - Implement the `EntryRepository` port defined in
//!   `minijournal-app::ports::storage`
//! - Map between the domain entry list and one pretty-printed JSON array on
//!   disk
//! - Degrade unreadable or corrupt files to an empty list on load
//!
//! ## Dependency rule
//! Depends on `minijournal-app` (for the port trait) and `minijournal-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod entry_repo;
pub mod error;

pub use entry_repo::JsonFileEntryRepository;
pub use error::StorageError;
