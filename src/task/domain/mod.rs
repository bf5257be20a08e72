//! Domain model for task management.
//!
//! The task domain models validated task fields, the configurable status
//! catalog and the completion-stamping rule while keeping all infrastructure
//! concerns outside of the domain boundary.

mod deadline;
mod error;
mod ids;
mod status;
mod task;

pub use deadline::Deadline;
pub use error::{StatusCatalogError, TaskDomainError, ValidationErrors};
pub use ids::TaskId;
pub use status::{StatusCatalog, TaskStatus};
pub use task::{NewTask, PersistedTaskData, Task, TaskChanges, TaskTitle};
