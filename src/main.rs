//! Taskboard HTTP server.
//!
//! Reads its settings from the environment (see [`taskboard::config`]),
//! stores data in `PostgreSQL` when `DATABASE_URL` is set and in memory
//! otherwise, and serves the HTML interface until interrupted.

use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::config::AppConfig;
use taskboard::db::{self, DatabaseSetupError};
use taskboard::project::adapters::{
    memory::InMemoryProjectRepository, postgres::PostgresProjectRepository,
};
use taskboard::project::ports::ProjectRepository;
use taskboard::task::adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository};
use taskboard::task::ports::TaskRepository;
use taskboard::telemetry::init_tracing;
use taskboard::web::{AppState, router};
use tokio::net::TcpListener;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type Repositories = (Arc<dyn TaskRepository>, Arc<dyn ProjectRepository>);

const POOL_SIZE: u32 = 8;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_filter())?;

    let (tasks, projects) = match config.database_url() {
        Some(url) => postgres_repositories(url).await?,
        None => {
            tracing::warn!("DATABASE_URL not set; data is kept in memory only");
            memory_repositories()
        }
    };
    let state = AppState::from_repositories(
        tasks,
        projects,
        Arc::new(DefaultClock),
        config.statuses().clone(),
    )?;

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "taskboard listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("taskboard stopped");
    Ok(())
}

fn memory_repositories() -> Repositories {
    (
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(InMemoryProjectRepository::new()),
    )
}

async fn postgres_repositories(url: &str) -> Result<Repositories, BoxError> {
    let database_url = url.to_owned();
    let pool = tokio::task::spawn_blocking(move || {
        let connected = db::connect(&database_url, POOL_SIZE)?;
        db::apply_schema(&connected)?;
        Ok::<_, DatabaseSetupError>(connected)
    })
    .await??;
    tracing::info!("connected to PostgreSQL and applied schema");
    Ok((
        Arc::new(PostgresTaskRepository::new(pool.clone())),
        Arc::new(PostgresProjectRepository::new(pool)),
    ))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
