//! JSON REST handlers for journal entries.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use minijournal_app::ports::EntryRepository;
use minijournal_app::services::entry_service::NewEntry;
use minijournal_domain::entry::Entry;
use minijournal_domain::id::EntryId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating an entry.
///
/// Absent fields deserialize to empty strings so they hit the same
/// validation failure as blank ones.
#[derive(Deserialize)]
pub struct CreateEntryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Entry>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Entry>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Confirmation body returned after a successful delete.
#[derive(Serialize)]
pub struct DeleteConfirmation {
    message: &'static str,
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted(Json<DeleteConfirmation>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted(json) => json.into_response(),
        }
    }
}

/// `GET /api/entries`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: EntryRepository + Send + Sync + 'static,
{
    let entries = state.entry_service.list_entries().await?;
    Ok(ListResponse::Ok(Json(entries)))
}

/// `POST /api/entries`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<CreateEntryRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: EntryRepository + Send + Sync + 'static,
{
    let created = state
        .entry_service
        .create_entry(NewEntry {
            name: req.name,
            message: req.message,
        })
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /api/entries/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<EntryId>,
) -> Result<DeleteResponse, ApiError>
where
    R: EntryRepository + Send + Sync + 'static,
{
    state.entry_service.delete_entry(id).await?;
    Ok(DeleteResponse::Deleted(Json(DeleteConfirmation {
        message: "Entry deleted successfully",
    })))
}
