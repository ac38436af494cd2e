//! Cross-cutting request wrappers: logging and panic recovery.

use std::any::Any;
use std::time::Instant;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{error, info};

use crate::error::ErrorBody;

/// Logs method and path on the way in, status and elapsed time on the way
/// out. Runs inside the recovery layer; a panic unwinds past the completion
/// line and surfaces as the recovery layer's 500.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let start = Instant::now();

    info!(%method, %path, "request received");
    let response = next.run(req).await;
    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed = ?start.elapsed(),
        "request completed"
    );

    response
}

/// Fault boundary for the task routes: a panic anywhere beneath it becomes a
/// structured 500 instead of a torn connection.
pub fn recovery_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(panic_response as fn(Box<dyn Any + Send + 'static>) -> Response)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "non-string panic payload".to_string()
    };
    error!(panic = %detail, "recovered from panic");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "Internal Server Error".to_string(),
        }),
    )
        .into_response()
}
