//! # minijournal-domain
//!
//! Pure domain model for the minijournal guestbook service.
//!
//! ## Responsibilities
//! - Foundational types: the entry identifier, error conventions, timestamps
//! - Define **Entries** (named journal submissions with identity)
//! - Define **Statistics** (aggregate figures derived from the entry list)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod entry;
pub mod error;
pub mod id;
pub mod stats;
pub mod time;
