// rest/envelope.rs — Uniform response envelope for the task API.
//
// Every task endpoint answers `{"data": ..., "message": ..., "success": ...}`,
// on failure too — only the status code and `success` flag change.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::tasks::TaskError;

#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub message: String,
    pub success: bool,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T, message: &str) -> Json<Self> {
        Json(Self {
            data: Some(data),
            message: message.to_string(),
            success: true,
        })
    }
}

/// Success with no payload — `data` serializes as `null` (delete).
pub fn ok_empty(message: &str) -> Json<Envelope<Value>> {
    Json(Envelope {
        data: None,
        message: message.to_string(),
        success: true,
    })
}

/// A [`TaskError`] rendered as an HTTP status plus the standard envelope.
/// Handlers return `Result<Json<Envelope<T>>, ApiError>` so the mapping
/// lives in one place.
#[derive(Debug)]
pub struct ApiError(pub TaskError);

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TaskError::Validation(_) => StatusCode::BAD_REQUEST,
            TaskError::NotFound(_) => StatusCode::NOT_FOUND,
            TaskError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Validation and not-found are normal flow; a storage failure is not.
        match &self.0 {
            TaskError::NotFound(id) => tracing::debug!(task_id = %id, "task not found"),
            TaskError::Storage(err) => tracing::error!(err = %err, "task storage failure"),
            TaskError::Validation(_) => {}
        }
        let body = json!({
            "data": null,
            "message": self.0.to_string(),
            "success": false,
        });
        (status, Json(body)).into_response()
    }
}
