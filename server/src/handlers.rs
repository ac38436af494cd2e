//! HTTP boundary: extract, delegate, render.
//!
//! Handlers stay thin. Body rejections are folded into [`TaskError`] so a
//! request that never parses gets the same `{"error": ...}` envelope as one
//! the service refused.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use shared::{CreateTaskRequest, Task, UpdateTaskRequest};
use utoipa::{OpenApi as _, ToSchema};

use crate::error::TaskError;
use crate::router::AppState;

/// Confirmation body for mutations that return no task.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Liveness probe body.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[utoipa::path(
    post,
    path = "/tasks",
    tag = "tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 200, description = "The created task with server-assigned fields", body = Task),
        (status = 400, description = "Undecodable body or empty title", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>, TaskError> {
    let Json(body) = payload.map_err(bad_body)?;
    let task = state.service.create_task(&body.title).await?;
    Ok(Json(task))
}

#[utoipa::path(
    get,
    path = "/tasks",
    tag = "tasks",
    responses(
        (status = 200, description = "Every stored task; an empty array when there are none", body = [Task]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn get_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, TaskError> {
    Ok(Json(state.service.get_tasks().await?))
}

#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Id of the task to update")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Update applied", body = MessageResponse),
        (status = 400, description = "Malformed id, undecodable body, or empty patch", body = ErrorBody),
        (status = 404, description = "No task with this id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, TaskError> {
    let Json(patch) = payload.map_err(bad_body)?;
    state.service.update_task(&id, patch).await?;
    Ok(Json(MessageResponse {
        message: "Task Updated Successfully",
    }))
}

#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Id of the task to delete")),
    responses(
        (status = 200, description = "Task removed", body = MessageResponse),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No task with this id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, TaskError> {
    state.service.delete_task(&id).await?;
    Ok(Json(MessageResponse {
        message: "Task Deleted Successfully",
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "OK" })
}

/// Serves the generated OpenAPI document.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::ApiDoc::openapi())
}

fn bad_body(rejection: JsonRejection) -> TaskError {
    TaskError::Validation(rejection.body_text())
}
