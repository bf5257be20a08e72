//! Error types for project domain validation.

use thiserror::Error;

/// Errors returned while constructing domain project values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is empty after trimming.
    #[error("Name can't be blank")]
    EmptyName,

    /// The project name exceeds the storable length.
    #[error("Name is too long (maximum is {max} characters)")]
    NameTooLong {
        /// Maximum number of characters.
        max: usize,
    },
}
