//! Task model and request payloads shared between the server's layers.

mod task_id;

pub use task_id::{ParseTaskIdError, TaskId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Server-generated identifier, immutable after creation.
    #[schema(value_type = String)]
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    /// Set once when the task is created.
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    pub title: String,
}

/// Partial update payload: only the fields that are present are replaced,
/// everything else is left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Task {
    /// Builds a new task with a fresh id, `completed = false`, and the
    /// creation timestamp taken now.
    #[must_use]
    pub fn new(title: String) -> Self {
        Self {
            id: TaskId::new(),
            title,
            completed: false,
            created_at: Utc::now(),
        }
    }
}

impl UpdateTaskRequest {
    /// True when the patch names no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }

    /// Applies the patch to `task`, replacing only the fields that are set.
    pub fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_has_creation_defaults() {
        let before = Utc::now();
        let task = Task::new("buy milk".to_string());
        let after = Utc::now();

        assert_eq!(task.title, "buy milk");
        assert!(!task.completed);
        assert!(task.created_at >= before && task.created_at <= after);
    }

    #[test]
    fn task_serializes_with_flat_field_names() {
        let task = Task::new("write report".to_string());
        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(value["id"], serde_json::json!(task.id.to_string()));
        assert_eq!(value["title"], "write report");
        assert_eq!(value["completed"], false);
        assert!(value["created_at"].is_string());
    }

    #[test]
    fn update_request_serializes_only_present_fields() {
        let patch = UpdateTaskRequest {
            title: None,
            completed: Some(true),
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"completed":true}"#);
    }

    #[test]
    fn empty_body_deserializes_to_empty_patch() {
        let patch: UpdateTaskRequest = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn apply_to_replaces_only_named_fields() {
        let mut task = Task::new("original".to_string());
        let created_at = task.created_at;
        let id = task.id;

        UpdateTaskRequest {
            title: None,
            completed: Some(true),
        }
        .apply_to(&mut task);

        assert_eq!(task.title, "original");
        assert!(task.completed);
        assert_eq!(task.id, id);
        assert_eq!(task.created_at, created_at);
    }

    #[test]
    fn create_request_requires_a_title_field() {
        let result: Result<CreateTaskRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
