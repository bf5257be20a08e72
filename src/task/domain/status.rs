//! Task statuses and the configurable catalog they are drawn from.

use super::{StatusCatalogError, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A task status name.
///
/// Values are produced by [`StatusCatalog::parse`] for user input, or by
/// [`TaskStatus::from_persisted`] for stored records, which may predate the
/// current catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskStatus(String);

impl TaskStatus {
    /// Restores a status read back from storage without catalog checks.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the status as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered set of allowed statuses with a default and a completion status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCatalog {
    statuses: Vec<TaskStatus>,
    default_status: TaskStatus,
    done_status: TaskStatus,
}

impl StatusCatalog {
    /// Longest status name the schema can store.
    pub const MAX_STATUS_CHARS: usize = 50;

    /// Builds a catalog from status names in display order.
    ///
    /// # Errors
    ///
    /// Returns [`StatusCatalogError`] when the list is empty, contains blank,
    /// overlong or duplicate names, or does not contain `default_status` and
    /// `done_status`.
    pub fn new<I, S>(
        statuses: I,
        default_status: &str,
        done_status: &str,
    ) -> Result<Self, StatusCatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for raw in statuses {
            let name = raw.as_ref().trim();
            if name.is_empty() {
                return Err(StatusCatalogError::BlankStatus);
            }
            if name.chars().count() > Self::MAX_STATUS_CHARS {
                return Err(StatusCatalogError::TooLong {
                    status: name.to_owned(),
                    max: Self::MAX_STATUS_CHARS,
                });
            }
            if !seen.insert(name.to_owned()) {
                return Err(StatusCatalogError::Duplicate(name.to_owned()));
            }
            ordered.push(TaskStatus(name.to_owned()));
        }
        if ordered.is_empty() {
            return Err(StatusCatalogError::Empty);
        }

        let default_name = default_status.trim();
        if !seen.contains(default_name) {
            return Err(StatusCatalogError::MissingDefault(default_name.to_owned()));
        }
        let done_name = done_status.trim();
        if !seen.contains(done_name) {
            return Err(StatusCatalogError::MissingDone(done_name.to_owned()));
        }

        Ok(Self {
            statuses: ordered,
            default_status: TaskStatus(default_name.to_owned()),
            done_status: TaskStatus(done_name.to_owned()),
        })
    }

    /// Validates user input against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnknownStatus`] when the value is not a
    /// catalog entry.
    pub fn parse(&self, value: &str) -> Result<TaskStatus, TaskDomainError> {
        let trimmed = value.trim();
        self.statuses
            .iter()
            .find(|status| status.as_str() == trimmed)
            .cloned()
            .ok_or_else(|| TaskDomainError::UnknownStatus(value.to_owned()))
    }

    /// Returns the statuses in display order.
    pub fn iter(&self) -> impl Iterator<Item = &TaskStatus> {
        self.statuses.iter()
    }

    /// Returns the status assigned to new tasks.
    #[must_use]
    pub const fn default_status(&self) -> &TaskStatus {
        &self.default_status
    }

    /// Returns the status that marks a task as completed.
    #[must_use]
    pub const fn done_status(&self) -> &TaskStatus {
        &self.done_status
    }

    /// Returns `true` when `status` is the completion status.
    #[must_use]
    pub fn is_done(&self, status: &TaskStatus) -> bool {
        *status == self.done_status
    }
}

impl Default for StatusCatalog {
    fn default() -> Self {
        let todo = TaskStatus("todo".to_owned());
        let done = TaskStatus("done".to_owned());
        Self {
            statuses: vec![todo.clone(), TaskStatus("doing".to_owned()), done.clone()],
            default_status: todo,
            done_status: done,
        }
    }
}
