//! JSON export of the full journal.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use minijournal_app::ports::EntryRepository;
use minijournal_domain::entry::Entry;
use minijournal_domain::time;

use crate::error::ApiError;
use crate::state::AppState;

/// Export envelope: the full entry list plus capture metadata.
#[derive(Serialize)]
pub struct ExportDocument {
    pub export_date: String,
    pub total_entries: usize,
    pub entries: Vec<Entry>,
}

/// Possible responses from the export endpoint.
pub enum GetResponse {
    Ok(Json<ExportDocument>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /export`
pub async fn get<R>(State(state): State<AppState<R>>) -> Result<GetResponse, ApiError>
where
    R: EntryRepository + Send + Sync + 'static,
{
    let entries = state.entry_service.list_entries().await?;
    Ok(GetResponse::Ok(Json(ExportDocument {
        export_date: time::iso_date(time::now()),
        total_entries: entries.len(),
        entries,
    })))
}
