//! `PostgreSQL` connection pooling and schema bootstrap.
//!
//! Both the project and task adapters share a single r2d2 pool. The schema is
//! applied from the embedded migration SQL, which only uses idempotent
//! statements so it can run on every start-up.

pub mod schema;

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// `PostgreSQL` connection pool type used by all adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// SQL creating the `projects` and `tasks` tables.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-19-000000_create_projects_and_tasks/up.sql");

/// Errors raised while preparing the database.
#[derive(Debug, Error)]
pub enum DatabaseSetupError {
    /// The pool could not be built.
    #[error("failed to build connection pool: {0}")]
    Pool(#[source] PoolError),

    /// A connection could not be checked out of the pool.
    #[error("failed to obtain connection: {0}")]
    Connection(#[source] PoolError),

    /// The schema SQL failed to execute.
    #[error("failed to apply schema: {0}")]
    Schema(#[source] diesel::result::Error),
}

/// Builds a connection pool for the given database URL.
///
/// # Errors
///
/// Returns [`DatabaseSetupError::Pool`] when the pool cannot establish its
/// initial connections.
pub fn connect(database_url: &str, max_size: u32) -> Result<PgPool, DatabaseSetupError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(DatabaseSetupError::Pool)
}

/// Applies the embedded schema to the pooled database.
///
/// This is a blocking operation that should be called from `spawn_blocking`
/// or a synchronous context.
///
/// # Errors
///
/// Returns [`DatabaseSetupError`] when no connection is available or the SQL
/// fails.
pub fn apply_schema(pool: &PgPool) -> Result<(), DatabaseSetupError> {
    let mut connection = pool.get().map_err(DatabaseSetupError::Connection)?;
    connection
        .batch_execute(CREATE_SCHEMA_SQL)
        .map_err(DatabaseSetupError::Schema)
}
