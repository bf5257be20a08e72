//! Taskboard: a server-rendered task list organised by project.
//!
//! Projects own tasks; each task has a title, a status drawn from a
//! configurable catalog, an optional deadline and a completion time stamped
//! when it first moves into the completion status.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//! - **Services**: Orchestration over ports with an injected clock
//!
//! # Modules
//!
//! - [`project`]: Projects that own tasks
//! - [`task`]: Task records, validation and lifecycle
//! - [`web`]: axum router, handlers and HTML views
//! - [`config`]: Environment-driven settings
//! - [`db`]: `PostgreSQL` connection pool and schema bootstrap
//! - [`telemetry`]: `tracing` subscriber setup

pub mod config;
pub mod db;
pub mod project;
pub mod task;
pub mod telemetry;
pub mod web;
