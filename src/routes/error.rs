//! JSON error responses shared by every handler.
//!
//! Every failure renders as `{"error": "..."}`. Server-side failures are
//! logged here and reach the client only as a generic message.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::{error, warn};

use crate::plan::export::ExportError;
use crate::services::room::RoomError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

impl From<RoomError> for ApiError {
    fn from(err: RoomError) -> Self {
        match err {
            RoomError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Room not found"),
            RoomError::InvalidName
            | RoomError::InvalidDimensions
            | RoomError::InvalidPosition
            | RoomError::InvalidRotation(_)
            | RoomError::UnknownTemplate(_) => Self::bad_request(err.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::InvalidScale(_) => Self::bad_request(err.to_string()),
            ExportError::Parse(_) | ExportError::Surface { .. } | ExportError::Encode(_) => {
                error!(error = %err, "floor plan export failed");
                Self::internal("Failed to export floor plan")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "rejected request body");
        Self::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(format!("Invalid query: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        Self::bad_request("Invalid room id")
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
