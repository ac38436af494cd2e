//! Application state and router assembly.

use axum::middleware::from_fn;
use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::middleware::{log_requests, recovery_layer};
use crate::service::TaskService;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: TaskService,
}

/// Builds the full router.
///
/// Task routes sit inside the middleware chain with recovery outermost, so
/// panics in the handlers and in the logger itself are both caught. Health
/// and the OpenAPI document live outside the chain; CORS wraps everything.
pub fn app(state: AppState) -> Router {
    let tasks = Router::new()
        .route(
            "/tasks",
            get(handlers::get_tasks).post(handlers::create_task),
        )
        .route(
            "/tasks/:id",
            put(handlers::update_task).delete(handlers::delete_task),
        )
        .layer(from_fn(log_requests))
        .layer(recovery_layer());

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api-docs/openapi.json", get(handlers::openapi))
        .merge(tasks)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
