//! Two-step deletion protocol.
//!
//! Deleting a task first yields a [`DeletionRequest`] describing what would
//! be removed. Nothing changes until the request is answered with a
//! [`Confirmation`].

use crate::project::domain::ProjectId;
use crate::task::domain::{Task, TaskId};

/// Pending intent to delete a task, awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionRequest {
    task: Task,
}

impl DeletionRequest {
    pub(crate) const fn new(task: Task) -> Self {
        Self { task }
    }

    /// Returns the task that would be deleted.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.task.project_id()
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task.id()
    }

    pub(crate) fn into_task(self) -> Task {
        self.task
    }
}

/// Answer to a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The user accepted the prompt.
    Accept,
    /// The user dismissed the prompt.
    Cancel,
}

impl Confirmation {
    /// Parses the value of a confirmation form field.
    ///
    /// Returns `None` for anything other than `accept` or `cancel`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "accept" => Some(Self::Accept),
            "cancel" => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// Result of answering a [`DeletionRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// The task was removed.
    Deleted(Task),
    /// The prompt was dismissed and the task kept.
    Cancelled(Task),
}
