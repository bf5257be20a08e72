//! Application services for task management.

mod deletion;
mod lifecycle;

pub use deletion::{Confirmation, DeletionOutcome, DeletionRequest};
pub use lifecycle::{
    CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult, UpdateTaskRequest,
};
