//! Storage capability trait and an in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use shared::{Task, TaskId, UpdateTaskRequest};
use tokio::sync::RwLock;

use crate::error::TaskError;

/// What the service layer needs from a storage backend.
///
/// [`crate::mongo::MongoTaskRepository`] serves production;
/// [`InMemoryTaskRepository`] backs tests and local experiments.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a new task and returns it unchanged.
    async fn create(&self, task: Task) -> Result<Task, TaskError>;

    /// Returns every stored task. Order is the backend's natural iteration
    /// order; callers must not rely on it.
    async fn list_all(&self) -> Result<Vec<Task>, TaskError>;

    /// Overwrites only the fields named by `patch` on the task with `id`.
    async fn update(&self, id: &TaskId, patch: UpdateTaskRequest) -> Result<(), TaskError>;

    /// Removes the task with `id`.
    async fn delete(&self, id: &TaskId) -> Result<(), TaskError>;
}

/// Hash-map-backed repository. The collection is flat and keyed by id, so a
/// map behind an async lock mirrors the store's shape exactly.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, TaskError> {
        let mut tasks = self.tasks.write().await;
        if tasks.contains_key(&task.id) {
            return Err(TaskError::Storage(format!("duplicate task id {}", task.id)));
        }
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn list_all(&self) -> Result<Vec<Task>, TaskError> {
        let tasks = self.tasks.read().await;
        Ok(tasks.values().cloned().collect())
    }

    async fn update(&self, id: &TaskId, patch: UpdateTaskRequest) -> Result<(), TaskError> {
        let mut tasks = self.tasks.write().await;
        let task = tasks.get_mut(id).ok_or(TaskError::NotFound(*id))?;
        patch.apply_to(task);
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> Result<(), TaskError> {
        let mut tasks = self.tasks.write().await;
        tasks
            .remove(id)
            .map(|_| ())
            .ok_or(TaskError::NotFound(*id))
    }
}
