//! Application services for project management.

mod catalog;

pub use catalog::{ProjectService, ProjectServiceError, ProjectServiceResult};
