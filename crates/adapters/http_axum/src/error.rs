//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use minijournal_domain::error::MiniJournalError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`MiniJournalError`] to an HTTP response with appropriate status
/// code.
pub struct ApiError(MiniJournalError);

impl From<MiniJournalError> for ApiError {
    fn from(err: MiniJournalError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            MiniJournalError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            MiniJournalError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save entry".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
