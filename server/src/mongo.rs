//! MongoDB-backed task repository.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{doc, to_document, Document};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use shared::{Task, TaskId, UpdateTaskRequest};
use tokio::time::timeout;

use crate::error::TaskError;
use crate::repository::TaskRepository;

/// Deadline applied independently to every storage call so one slow query
/// cannot hold a request open indefinitely.
const OP_TIMEOUT: Duration = Duration::from_secs(5);

/// Persistence shape of a task. The id lives under `_id` so the collection's
/// primary key enforces uniqueness; everything else matches the API shape.
#[derive(Debug, Serialize, Deserialize)]
struct TaskDocument {
    #[serde(rename = "_id")]
    id: TaskId,
    title: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl From<Task> for TaskDocument {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            completed: task.completed,
            created_at: task.created_at,
        }
    }
}

impl From<TaskDocument> for Task {
    fn from(document: TaskDocument) -> Self {
        Self {
            id: document.id,
            title: document.title,
            completed: document.completed,
            created_at: document.created_at,
        }
    }
}

/// Storage gateway over one collection in one database.
#[derive(Clone)]
pub struct MongoTaskRepository {
    collection: Collection<TaskDocument>,
}

impl MongoTaskRepository {
    #[must_use]
    pub fn new(db: &Database, collection: &str) -> Self {
        Self {
            collection: db.collection(collection),
        }
    }
}

#[async_trait]
impl TaskRepository for MongoTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, TaskError> {
        let document = TaskDocument::from(task.clone());
        timeout(OP_TIMEOUT, self.collection.insert_one(document)).await??;
        Ok(task)
    }

    async fn list_all(&self) -> Result<Vec<Task>, TaskError> {
        let documents: Vec<TaskDocument> = timeout(OP_TIMEOUT, async {
            self.collection.find(doc! {}).await?.try_collect().await
        })
        .await??;

        Ok(documents.into_iter().map(Task::from).collect())
    }

    async fn update(&self, id: &TaskId, patch: UpdateTaskRequest) -> Result<(), TaskError> {
        let fields = set_payload(&patch)?;
        let result = timeout(
            OP_TIMEOUT,
            self.collection
                .update_one(doc! { "_id": id.to_string() }, doc! { "$set": fields }),
        )
        .await??;

        if result.matched_count == 0 {
            return Err(TaskError::NotFound(*id));
        }
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> Result<(), TaskError> {
        let result = timeout(
            OP_TIMEOUT,
            self.collection.delete_one(doc! { "_id": id.to_string() }),
        )
        .await??;

        if result.deleted_count == 0 {
            return Err(TaskError::NotFound(*id));
        }
        Ok(())
    }
}

/// Builds the `$set` payload from a patch. Absent fields are absent from the
/// document too, so the update touches only what the caller named.
fn set_payload(patch: &UpdateTaskRequest) -> Result<Document, TaskError> {
    to_document(patch).map_err(|err| TaskError::Storage(err.to_string()))
}
