//! HTTP interface: axum router, request handlers and page rendering.

mod error;
mod forms;
pub mod format;
pub mod paths;
mod projects;
mod tasks;
mod views;

pub use error::WebError;
pub use forms::{NoticeQuery, ProjectForm, TaskForm};
pub use views::{Notice, Views};

use crate::project::{ports::ProjectRepository, services::ProjectService};
use crate::task::{domain::StatusCatalog, ports::TaskRepository, services::TaskService};
use axum::{Router, routing::get};
use mockable::Clock;
use std::sync::Arc;

/// Task service over type-erased repositories and clock.
pub type SharedTaskService =
    TaskService<dyn TaskRepository, dyn ProjectRepository, dyn Clock + Send + Sync>;

/// Project service over a type-erased repository and clock.
pub type SharedProjectService = ProjectService<dyn ProjectRepository, dyn Clock + Send + Sync>;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    tasks: SharedTaskService,
    projects: SharedProjectService,
    views: Arc<Views>,
}

impl AppState {
    /// Bundles the services with the compiled page templates.
    #[must_use]
    pub fn new(tasks: SharedTaskService, projects: SharedProjectService, views: Views) -> Self {
        Self {
            tasks,
            projects,
            views: Arc::new(views),
        }
    }

    /// Wires services over the given repositories and compiles the views.
    ///
    /// # Errors
    ///
    /// Returns a template error when an embedded template fails to compile.
    pub fn from_repositories(
        tasks: Arc<dyn TaskRepository>,
        projects: Arc<dyn ProjectRepository>,
        clock: Arc<dyn Clock + Send + Sync>,
        catalog: StatusCatalog,
    ) -> Result<Self, minijinja::Error> {
        let task_service = TaskService::new(tasks, Arc::clone(&projects), Arc::clone(&clock))
            .with_catalog(catalog);
        let project_service = ProjectService::new(projects, clock);
        Ok(Self::new(task_service, project_service, Views::new()?))
    }

    /// Task service used by the handlers.
    #[must_use]
    pub const fn tasks(&self) -> &SharedTaskService {
        &self.tasks
    }

    /// Project service used by the handlers.
    #[must_use]
    pub const fn projects(&self) -> &SharedProjectService {
        &self.projects
    }
}

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(projects::root))
        .route("/projects", get(projects::index).post(projects::create))
        .route("/projects/new", get(projects::new_form))
        .route("/projects/{project_id}", get(projects::show))
        .route(
            "/projects/{project_id}/tasks",
            get(tasks::index).post(tasks::create),
        )
        .route("/projects/{project_id}/tasks/new", get(tasks::new_form))
        .route(
            "/projects/{project_id}/tasks/{task_id}",
            get(tasks::show)
                .patch(tasks::update)
                .put(tasks::update)
                .delete(tasks::destroy)
                .post(tasks::override_method),
        )
        .route("/projects/{project_id}/tasks/{task_id}/edit", get(tasks::edit))
        .route(
            "/projects/{project_id}/tasks/{task_id}/delete",
            get(tasks::confirm_delete),
        )
        .fallback(not_found)
        .with_state(state)
}

#[expect(clippy::unused_async, reason = "axum fallback handlers are async")]
async fn not_found() -> WebError {
    WebError::NotFound
}
