//! Task-management HTTP service.
//!
//! A thin axum front over a layered core: handlers extract and render,
//! [`TaskService`] owns the business rules, and storage hides behind the
//! [`TaskRepository`] trait with a MongoDB gateway in production and an
//! in-memory map in tests.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod mongo;
pub mod repository;
pub mod router;
pub mod service;

pub use config::AppConfig;
pub use error::TaskError;
pub use mongo::MongoTaskRepository;
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use router::{app, AppState};
pub use service::TaskService;

use utoipa::OpenApi;

/// OpenAPI description of the task API, served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::create_task,
        handlers::get_tasks,
        handlers::update_task,
        handlers::delete_task,
        handlers::health,
    ),
    components(schemas(
        shared::Task,
        shared::CreateTaskRequest,
        shared::UpdateTaskRequest,
        error::ErrorBody,
        handlers::MessageResponse,
        handlers::HealthResponse,
    )),
    tags(
        (name = "tasks", description = "Task management endpoints"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
