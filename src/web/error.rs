//! HTTP error responses.

use crate::project::services::ProjectServiceError;
use crate::task::services::TaskServiceError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

const NOT_FOUND_PAGE: &str = include_str!("../../templates/errors/404.html");
const INTERNAL_ERROR_PAGE: &str = include_str!("../../templates/errors/500.html");

/// Failure of a request handler.
///
/// Validation failures never reach this type; handlers re-render their
/// form with `422` instead.
#[derive(Debug, Error)]
pub enum WebError {
    /// Unknown route, project or task.
    #[error("not found")]
    NotFound,

    /// The `_method` override named an unsupported method.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Page template failed to render.
    #[error("template rendering failed: {0}")]
    Render(#[from] minijinja::Error),

    /// Storage or another dependency failed.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<TaskServiceError> for WebError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::ProjectNotFound(_) | TaskServiceError::TaskNotFound { .. } => {
                Self::NotFound
            }
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<ProjectServiceError> for WebError {
    fn from(err: ProjectServiceError) -> Self {
        match err {
            ProjectServiceError::NotFound(_) => Self::NotFound,
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response(),
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED.into_response(),
            Self::Render(err) => {
                tracing::error!(error = %err, "failed to render page");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE)).into_response()
            }
            Self::Internal(message) => {
                tracing::error!(error = %message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE)).into_response()
            }
        }
    }
}
