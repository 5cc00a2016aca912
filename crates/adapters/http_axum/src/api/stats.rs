//! JSON REST handler for journal statistics.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use minijournal_app::ports::EntryRepository;
use minijournal_domain::stats::Stats;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the stats endpoint.
pub enum GetResponse {
    Ok(Json<Stats>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/stats`
pub async fn get<R>(State(state): State<AppState<R>>) -> Result<GetResponse, ApiError>
where
    R: EntryRepository + Send + Sync + 'static,
{
    let stats = state.entry_service.stats().await?;
    Ok(GetResponse::Ok(Json(stats)))
}
