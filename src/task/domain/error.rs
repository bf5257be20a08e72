//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
///
/// The display text of each variant is the user-facing message shown next
/// to the offending form field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("Title can't be blank")]
    EmptyTitle,

    /// The task title exceeds the storable length.
    #[error("Title is too long (maximum is {max} characters)")]
    TitleTooLong {
        /// Maximum number of characters.
        max: usize,
    },

    /// The status is not part of the configured catalog.
    #[error("Status is not included in the list")]
    UnknownStatus(String),

    /// The deadline could not be parsed.
    #[error("Deadline is invalid")]
    InvalidDeadline(String),
}

impl TaskDomainError {
    /// Returns the name of the form field the error belongs to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle | Self::TitleTooLong { .. } => "title",
            Self::UnknownStatus(_) => "status",
            Self::InvalidDeadline(_) => "deadline",
        }
    }
}

/// Every field error found while validating a single request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("validation failed: {}", join_messages(.0))]
pub struct ValidationErrors(Vec<TaskDomainError>);

impl ValidationErrors {
    /// Wraps the field errors of one rejected request.
    #[must_use]
    pub const fn new(errors: Vec<TaskDomainError>) -> Self {
        Self(errors)
    }

    /// Returns the individual field errors in discovery order.
    #[must_use]
    pub fn errors(&self) -> &[TaskDomainError] {
        &self.0
    }

    /// Returns the user-facing messages in discovery order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Returns `true` when any error belongs to `field`.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field() == field)
    }
}

fn join_messages(errors: &[TaskDomainError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors returned while building a status catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatusCatalogError {
    /// No statuses were supplied.
    #[error("status catalog must contain at least one status")]
    Empty,

    /// A status name is blank.
    #[error("status names must not be blank")]
    BlankStatus,

    /// A status name exceeds the storable length.
    #[error("status '{status}' is longer than {max} characters")]
    TooLong {
        /// The offending status name.
        status: String,
        /// Maximum number of characters.
        max: usize,
    },

    /// A status name appears more than once.
    #[error("duplicate status '{0}'")]
    Duplicate(String),

    /// The default status is not part of the catalog.
    #[error("default status '{0}' is not in the catalog")]
    MissingDefault(String),

    /// The completion status is not part of the catalog.
    #[error("completion status '{0}' is not in the catalog")]
    MissingDone(String),
}
