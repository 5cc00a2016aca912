//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod entries;
#[allow(clippy::missing_errors_doc)]
pub mod export;
#[allow(clippy::missing_errors_doc)]
pub mod stats;

use axum::Router;
use axum::routing::{delete, get};

use minijournal_app::ports::EntryRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: EntryRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/entries", get(entries::list::<R>).post(entries::create::<R>))
        .route("/entries/{id}", delete(entries::delete::<R>))
        .route("/stats", get(stats::get::<R>))
}
