//! Error taxonomy and the JSON error envelope.
//!
//! Every failed request renders as `{"error": "<message>"}` with one
//! status-mapping policy: validation and malformed ids are 400, a missing
//! task is 404, storage failures (including timeouts) are 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use shared::{ParseTaskIdError, TaskId};
use thiserror::Error;
use utoipa::ToSchema;

/// Everything that can go wrong between a request and the store.
#[derive(Debug, Error)]
pub enum TaskError {
    /// A business rule rejected the input.
    #[error("{0}")]
    Validation(String),
    /// The id path segment does not parse as a task id.
    #[error(transparent)]
    InvalidId(#[from] ParseTaskIdError),
    /// No task with the given id exists.
    #[error("task {0} not found")]
    NotFound(TaskId),
    /// The store failed, produced an undecodable document, or timed out.
    #[error("storage error: {0}")]
    Storage(String),
}

/// The body shape shared by every error response, including the recovery
/// middleware's.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl TaskError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<mongodb::error::Error> for TaskError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<tokio::time::error::Elapsed> for TaskError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Self::Storage("operation timed out".to_string())
    }
}
