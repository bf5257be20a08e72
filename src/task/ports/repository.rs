//! Repository port for task persistence and lookup.

use crate::project::domain::ProjectId;
use crate::task::domain::{NewTask, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every lookup is scoped to a project: a task is invisible through any
/// project other than the one that owns it.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// Identifiers are strictly increasing and never reused.
    async fn insert(&self, task: NewTask) -> TaskRepositoryResult<Task>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task owned by `project_id`.
    ///
    /// Returns `None` when the task does not exist or belongs to another
    /// project.
    async fn find(&self, project_id: ProjectId, id: TaskId)
    -> TaskRepositoryResult<Option<Task>>;

    /// Returns the tasks of a project in insertion order.
    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>>;

    /// Removes a task owned by `project_id`.
    ///
    /// Returns `false` when nothing matched.
    async fn delete(&self, project_id: ProjectId, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Returns the number of stored tasks across all projects.
    async fn count(&self) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
