//! Service layer for task creation, lookup, update and deletion.

use super::{Confirmation, DeletionOutcome, DeletionRequest};
use crate::project::{
    domain::ProjectId,
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::task::{
    domain::{
        Deadline, NewTask, StatusCatalog, Task, TaskChanges, TaskDomainError, TaskId, TaskTitle,
        ValidationErrors,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    status: Option<String>,
    deadline: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: None,
            deadline: None,
        }
    }

    /// Sets the initial status; the catalog default applies otherwise.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the deadline as entered in a form.
    #[must_use]
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }
}

/// Request payload for a partial task update.
///
/// Fields left unset are not touched. A blank deadline clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    status: Option<String>,
    deadline: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Replaces the deadline as entered in a form.
    #[must_use]
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }
}

/// Errors returned by task service operations.
#[derive(Debug, Clone, Error)]
pub enum TaskServiceError {
    /// One or more fields failed validation; nothing was persisted.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The task does not exist within the project.
    #[error("task {task_id} not found in project {project_id}")]
    TaskNotFound {
        /// Project the lookup was scoped to.
        project_id: ProjectId,
        /// Requested task.
        task_id: TaskId,
    },

    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// Project repository operation failed.
    #[error(transparent)]
    ProjectRepository(#[from] ProjectRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Implements the task store operations on top of the repository ports,
/// validating input against the status catalog and stamping times from the
/// injected clock.
pub struct TaskService<R, P, C>
where
    R: TaskRepository + ?Sized,
    P: ProjectRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    tasks: Arc<R>,
    projects: Arc<P>,
    clock: Arc<C>,
    catalog: Arc<StatusCatalog>,
}

impl<R, P, C> Clone for TaskService<R, P, C>
where
    R: TaskRepository + ?Sized,
    P: ProjectRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            projects: Arc::clone(&self.projects),
            clock: Arc::clone(&self.clock),
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<R, P, C> TaskService<R, P, C>
where
    R: TaskRepository + ?Sized,
    P: ProjectRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    /// Creates a service using the default `todo`/`doing`/`done` catalog.
    #[must_use]
    pub fn new(tasks: Arc<R>, projects: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            projects,
            clock,
            catalog: Arc::new(StatusCatalog::default()),
        }
    }

    /// Replaces the status catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: StatusCatalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    /// Returns the status catalog used for validation.
    #[must_use]
    pub fn statuses(&self) -> &StatusCatalog {
        &self.catalog
    }

    /// Returns the tasks of a project in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ProjectNotFound`] for unknown projects.
    pub async fn list(&self, project_id: ProjectId) -> TaskServiceResult<Vec<Task>> {
        self.ensure_project(project_id).await?;
        let tasks = self.tasks.list_by_project(project_id).await?;
        tracing::debug!(%project_id, count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Creates a task in the given project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] with every field error when
    /// input is invalid, [`TaskServiceError::ProjectNotFound`] for unknown
    /// projects, or a repository error when persistence fails.
    pub async fn create(
        &self,
        project_id: ProjectId,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        self.ensure_project(project_id).await?;

        let title = TaskTitle::new(request.title);
        let status = match request.status.as_deref() {
            Some(raw) => self.catalog.parse(raw),
            None => Ok(self.catalog.default_status().clone()),
        };
        let deadline = request.deadline.as_deref().map_or(Ok(None), Deadline::parse);

        let (task_title, task_status, task_deadline) = match (title, status, deadline) {
            (Ok(title), Ok(status), Ok(deadline)) => (title, status, deadline),
            (title, status, deadline) => {
                let errors = [title.err(), status.err(), deadline.err()];
                return Err(reject(project_id, errors));
            }
        };

        let new_task = NewTask::new(
            project_id,
            task_title,
            task_status,
            task_deadline,
            &self.catalog,
            &*self.clock,
        );
        let task = self.tasks.insert(new_task).await?;
        tracing::info!(%project_id, task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Returns a task of the given project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task is absent or
    /// owned by another project.
    pub async fn get(&self, project_id: ProjectId, task_id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .find(project_id, task_id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound {
                project_id,
                task_id,
            })
    }

    /// Applies a partial update to a task.
    ///
    /// Moving the task into the completion status from another status stamps
    /// its completion time; no other change touches it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] for unknown tasks and
    /// [`TaskServiceError::Validation`] when any field is invalid, in which
    /// case the stored task is unchanged.
    pub async fn update(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let mut task = self.get(project_id, task_id).await?;

        let title = request.title.map(TaskTitle::new).transpose();
        let status = request
            .status
            .as_deref()
            .map(|raw| self.catalog.parse(raw))
            .transpose();
        let deadline = request.deadline.as_deref().map(Deadline::parse).transpose();

        let changes = match (title, status, deadline) {
            (Ok(title), Ok(status), Ok(deadline)) => TaskChanges {
                title,
                status,
                deadline,
            },
            (title, status, deadline) => {
                let errors = [title.err(), status.err(), deadline.err()];
                return Err(reject(project_id, errors));
            }
        };

        let completed = task.apply(changes, &self.catalog, &*self.clock);
        self.tasks.update(&task).await.map_err(|err| match err {
            TaskRepositoryError::NotFound(_) => TaskServiceError::TaskNotFound {
                project_id,
                task_id,
            },
            other => TaskServiceError::Repository(other),
        })?;
        tracing::info!(%project_id, %task_id, status = %task.status(), completed, "task updated");
        Ok(task)
    }

    /// Starts the deletion protocol for a task.
    ///
    /// Nothing is removed until [`Self::confirm_deletion`] is called with
    /// [`Confirmation::Accept`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] for unknown tasks.
    pub async fn request_deletion(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> TaskServiceResult<DeletionRequest> {
        let task = self.get(project_id, task_id).await?;
        Ok(DeletionRequest::new(task))
    }

    /// Answers a pending deletion request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task disappeared
    /// after the request was issued.
    pub async fn confirm_deletion(
        &self,
        request: DeletionRequest,
        confirmation: Confirmation,
    ) -> TaskServiceResult<DeletionOutcome> {
        let project_id = request.project_id();
        let task_id = request.task_id();
        match confirmation {
            Confirmation::Cancel => {
                tracing::debug!(%project_id, %task_id, "task deletion cancelled");
                Ok(DeletionOutcome::Cancelled(request.into_task()))
            }
            Confirmation::Accept => {
                if !self.tasks.delete(project_id, task_id).await? {
                    return Err(TaskServiceError::TaskNotFound {
                        project_id,
                        task_id,
                    });
                }
                tracing::info!(%project_id, %task_id, "task deleted");
                Ok(DeletionOutcome::Deleted(request.into_task()))
            }
        }
    }

    /// Returns the number of tasks across all projects.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the count fails.
    pub async fn count(&self) -> TaskServiceResult<u64> {
        Ok(self.tasks.count().await?)
    }

    async fn ensure_project(&self, project_id: ProjectId) -> TaskServiceResult<()> {
        match self.projects.find_by_id(project_id).await? {
            Some(_) => Ok(()),
            None => Err(TaskServiceError::ProjectNotFound(project_id)),
        }
    }
}

/// Logs and wraps the field errors of a rejected request.
fn reject(project_id: ProjectId, found: [Option<TaskDomainError>; 3]) -> TaskServiceError {
    let errors: Vec<TaskDomainError> = found.into_iter().flatten().collect();
    let fields: Vec<&str> = errors.iter().map(TaskDomainError::field).collect();
    tracing::warn!(%project_id, ?fields, "task input rejected");
    TaskServiceError::Validation(ValidationErrors::new(errors))
}
