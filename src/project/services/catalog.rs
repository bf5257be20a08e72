//! Service layer for creating and looking up projects.

use crate::project::{
    domain::{NewProject, Project, ProjectDomainError, ProjectId, ProjectName},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by project service operations.
#[derive(Debug, Clone, Error)]
pub enum ProjectServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ProjectDomainError),

    /// The requested project does not exist.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Project orchestration service.
pub struct ProjectService<P, C>
where
    P: ProjectRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    repository: Arc<P>,
    clock: Arc<C>,
}

impl<P, C> Clone for ProjectService<P, C>
where
    P: ProjectRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<P, C> ProjectService<P, C>
where
    P: ProjectRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(repository: Arc<P>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a project with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Validation`] when the name is blank or
    /// too long, and [`ProjectServiceError::Repository`] when persistence
    /// fails.
    pub async fn create(&self, name: impl Into<String>) -> ProjectServiceResult<Project> {
        let project_name = ProjectName::new(name)?;
        let project = self
            .repository
            .insert(NewProject::new(project_name, &*self.clock))
            .await?;
        tracing::info!(project_id = %project.id(), "project created");
        Ok(project)
    }

    /// Returns the project with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when no project matches.
    pub async fn get(&self, id: ProjectId) -> ProjectServiceResult<Project> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProjectServiceError::NotFound(id))
    }

    /// Returns every project ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when the lookup fails.
    pub async fn list(&self) -> ProjectServiceResult<Vec<Project>> {
        Ok(self.repository.list().await?)
    }
}
