//! Business rules: validation, id parsing, and field generation.
//!
//! This is the only layer that knows what makes a task valid. Storage stays
//! abstract behind [`TaskRepository`], so every rule here is testable without
//! a running store.

use std::sync::Arc;

use shared::{Task, TaskId, UpdateTaskRequest};

use crate::error::TaskError;
use crate::repository::TaskRepository;

#[derive(Clone)]
pub struct TaskService {
    repo: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }

    /// Creates a task from `title`, generating the id, the `completed`
    /// default and the creation timestamp here rather than trusting the
    /// caller with them.
    pub async fn create_task(&self, title: &str) -> Result<Task, TaskError> {
        if title.is_empty() {
            return Err(TaskError::Validation("title must not be empty".to_string()));
        }
        self.repo.create(Task::new(title.to_string())).await
    }

    pub async fn get_tasks(&self) -> Result<Vec<Task>, TaskError> {
        self.repo.list_all().await
    }

    /// Applies `patch` to the task with `id`.
    ///
    /// The id is parsed before storage is touched, an empty patch is
    /// rejected outright, and a patch that names the title must satisfy the
    /// same non-empty rule as creation.
    pub async fn update_task(&self, id: &str, patch: UpdateTaskRequest) -> Result<(), TaskError> {
        let id: TaskId = id.parse()?;
        if patch.is_empty() {
            return Err(TaskError::Validation("update names no fields".to_string()));
        }
        if matches!(&patch.title, Some(title) if title.is_empty()) {
            return Err(TaskError::Validation("title must not be empty".to_string()));
        }
        self.repo.update(&id, patch).await
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), TaskError> {
        let id: TaskId = id.parse()?;
        self.repo.delete(&id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryTaskRepository;
    use chrono::Utc;

    fn service() -> (TaskService, InMemoryTaskRepository) {
        let repo = InMemoryTaskRepository::new();
        (TaskService::new(Arc::new(repo.clone())), repo)
    }

    fn patch(title: Option<&str>, completed: Option<bool>) -> UpdateTaskRequest {
        UpdateTaskRequest {
            title: title.map(str::to_string),
            completed,
        }
    }

    #[tokio::test]
    async fn created_tasks_get_fresh_server_side_fields() {
        let (service, _) = service();

        let before = Utc::now();
        let first = service.create_task("buy milk").await.unwrap();
        let second = service.create_task("buy milk").await.unwrap();
        let after = Utc::now();

        assert_ne!(first.id, second.id);
        assert_eq!(first.title, "buy milk");
        assert!(!first.completed);
        assert!(first.created_at >= before && first.created_at <= after);
    }

    #[tokio::test]
    async fn empty_title_never_reaches_storage() {
        let (service, repo) = service();

        let err = service.create_task("").await.unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn listing_returns_what_was_created() {
        let (service, _) = service();

        let created = service.create_task("water plants").await.unwrap();
        let all = service.get_tasks().await.unwrap();

        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn update_merges_without_touching_other_fields() {
        let (service, _) = service();
        let created = service.create_task("stretch").await.unwrap();

        service
            .update_task(&created.id.to_string(), patch(None, Some(true)))
            .await
            .unwrap();

        let all = service.get_tasks().await.unwrap();
        assert_eq!(all[0].title, "stretch");
        assert!(all[0].completed);
        assert_eq!(all[0].created_at, created.created_at);
        assert_eq!(all[0].id, created.id);
    }

    #[tokio::test]
    async fn update_can_rename() {
        let (service, _) = service();
        let created = service.create_task("old title").await.unwrap();

        service
            .update_task(&created.id.to_string(), patch(Some("new title"), None))
            .await
            .unwrap();

        let all = service.get_tasks().await.unwrap();
        assert_eq!(all[0].title, "new title");
        assert!(!all[0].completed);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let (service, _) = service();

        let err = service
            .update_task(&TaskId::new().to_string(), patch(None, Some(true)))
            .await
            .unwrap_err();
        assert!(matches!(err, TaskError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_with_malformed_id_leaves_storage_untouched() {
        let (service, _) = service();
        let created = service.create_task("survivor").await.unwrap();

        let err = service
            .update_task("not-a-valid-id", patch(None, Some(true)))
            .await
            .unwrap_err();
        assert!(matches!(err, TaskError::InvalidId(_)));

        let all = service.get_tasks().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn empty_patch_is_rejected_before_storage() {
        let (service, _) = service();
        let created = service.create_task("unchanged").await.unwrap();

        let err = service
            .update_task(&created.id.to_string(), patch(None, None))
            .await
            .unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));

        let all = service.get_tasks().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn update_cannot_blank_the_title() {
        let (service, _) = service();
        let created = service.create_task("keep me named").await.unwrap();

        let err = service
            .update_task(&created.id.to_string(), patch(Some(""), None))
            .await
            .unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));

        let all = service.get_tasks().await.unwrap();
        assert_eq!(all[0].title, "keep me named");
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_task() {
        let (service, _) = service();
        let doomed = service.create_task("doomed").await.unwrap();
        let kept = service.create_task("kept").await.unwrap();

        service.delete_task(&doomed.id.to_string()).await.unwrap();

        let all = service.get_tasks().await.unwrap();
        assert_eq!(all, vec![kept]);
    }

    #[tokio::test]
    async fn delete_of_unknown_or_malformed_id_fails() {
        let (service, _) = service();

        let err = service
            .delete_task(&TaskId::new().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, TaskError::NotFound(_)));

        let err = service.delete_task("12345").await.unwrap_err();
        assert!(matches!(err, TaskError::InvalidId(_)));
    }
}
