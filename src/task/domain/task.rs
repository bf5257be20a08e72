//! Task aggregate root and its validated fields.

use super::{Deadline, StatusCatalog, TaskDomainError, TaskId, TaskStatus};
use crate::project::domain::ProjectId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty, trimmed task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Longest title the schema can store.
    pub const MAX_CHARS: usize = 255;

    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] for blank input and
    /// [`TaskDomainError::TitleTooLong`] beyond [`Self::MAX_CHARS`].
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        if trimmed.chars().count() > Self::MAX_CHARS {
            return Err(TaskDomainError::TitleTooLong {
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated task that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    project_id: ProjectId,
    title: TaskTitle,
    status: TaskStatus,
    deadline: Option<Deadline>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Prepares a task for insertion.
    ///
    /// A task created directly in the completion status is stamped as
    /// completed at creation time.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        title: TaskTitle,
        status: TaskStatus,
        deadline: Option<Deadline>,
        catalog: &StatusCatalog,
        clock: &(impl Clock + ?Sized),
    ) -> Self {
        let timestamp = clock.utc();
        let completed_at = catalog.is_done(&status).then_some(timestamp);
        Self {
            project_id,
            title,
            status,
            deadline,
            completed_at,
            created_at: timestamp,
        }
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Deadline> {
        self.deadline
    }

    /// Returns the completion timestamp, if created as completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attaches the store-assigned identifier.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            project_id: self.project_id,
            title: self.title,
            status: self.status,
            deadline: self.deadline,
            completed_at: self.completed_at,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Validated partial update for a task.
///
/// `None` leaves a field untouched; `deadline: Some(None)` clears the
/// deadline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Replacement deadline.
    pub deadline: Option<Option<Deadline>>,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: TaskTitle,
    status: TaskStatus,
    deadline: Option<Deadline>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted deadline.
    pub deadline: Option<Deadline>,
    /// Persisted completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            status: data.status,
            deadline: data.deadline,
            completed_at: data.completed_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Deadline> {
        self.deadline
    }

    /// Returns when the task first reached the completion status.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a partial update.
    ///
    /// Moving from any other status into the catalog's completion status
    /// stamps `completed_at` with the clock time. Staying in the completion
    /// status, or leaving it, never touches `completed_at`.
    ///
    /// Returns `true` when this update stamped the completion time.
    pub fn apply(
        &mut self,
        changes: TaskChanges,
        catalog: &StatusCatalog,
        clock: &(impl Clock + ?Sized),
    ) -> bool {
        let timestamp = clock.utc();
        let TaskChanges {
            title,
            status,
            deadline,
        } = changes;

        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_deadline) = deadline {
            self.deadline = new_deadline;
        }

        let mut completed = false;
        if let Some(new_status) = status {
            if catalog.is_done(&new_status) && !catalog.is_done(&self.status) {
                self.completed_at = Some(timestamp);
                completed = true;
            }
            self.status = new_status;
        }

        self.updated_at = timestamp;
        completed
    }
}
