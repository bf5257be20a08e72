//! `PostgreSQL` adapter for project persistence.

mod models;
mod repository;

pub use repository::PostgresProjectRepository;
