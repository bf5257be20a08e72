//! In-memory repository for tasks.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::project::domain::ProjectId;
use crate::task::{
    domain::{NewTask, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        // The counter only moves forward, so deleted ids are never handed out again.
        state.last_id += 1;
        let stored = task.into_task(TaskId::new(state.last_id));
        state.tasks.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let existing = state
            .tasks
            .get_mut(&task.id())
            .filter(|existing| existing.project_id() == task.project_id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *existing = task.clone();
        Ok(())
    }

    async fn find(
        &self,
        project_id: ProjectId,
        id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .tasks
            .get(&id)
            .filter(|task| task.project_id() == project_id)
            .cloned())
    }

    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, project_id: ProjectId, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        let owned = state
            .tasks
            .get(&id)
            .is_some_and(|task| task.project_id() == project_id);
        if owned {
            state.tasks.remove(&id);
        }
        Ok(owned)
    }

    async fn count(&self) -> TaskRepositoryResult<u64> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(u64::try_from(state.tasks.len()).unwrap_or(u64::MAX))
    }
}
