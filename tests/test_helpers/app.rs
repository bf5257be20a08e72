//! Application wiring over in-memory storage.

use super::clock::ManualClock;
use axum::Router;
use std::sync::Arc;
use taskboard::project::{adapters::memory::InMemoryProjectRepository, domain::Project};
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{StatusCatalog, Task},
    services::CreateTaskRequest,
};
use taskboard::web::{AppState, router};

/// Router plus direct access to the services behind it.
pub struct TestApp {
    /// Application state shared with the router.
    pub state: AppState,
    /// Clock injected into both services.
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Builds an app with empty storage and the clock at 2024-03-10 08:00 UTC.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(ManualClock::at(2024, 3, 10, 8, 0));
        let state = AppState::from_repositories(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(InMemoryProjectRepository::new()),
            Arc::clone(&clock) as Arc<dyn mockable::Clock + Send + Sync>,
            StatusCatalog::default(),
        )
        .expect("templates compile");
        Self { state, clock }
    }

    /// Returns a router over the shared state.
    #[must_use]
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Creates a project through the service layer.
    pub async fn project(&self, name: &str) -> Project {
        self.state
            .projects()
            .create(name)
            .await
            .expect("project creation should succeed")
    }

    /// Creates a task through the service layer.
    pub async fn task(&self, project: &Project, request: CreateTaskRequest) -> Task {
        self.state
            .tasks()
            .create(project.id(), request)
            .await
            .expect("task creation should succeed")
    }

    /// Number of stored tasks.
    pub async fn task_count(&self) -> u64 {
        self.state.tasks().count().await.expect("count tasks")
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
