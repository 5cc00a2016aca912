//! # minijournal-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **storage port** that persistence adapters implement:
//!   - `EntryRepository` — load/save the whole entry list
//! - Define **driving use-cases**:
//!   - `EntryService` — list, create, delete, statistics, seeding
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `minijournal-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
