//! Form and query payloads decoded from requests.

use super::views::{Notice, TaskFormValues};
use crate::task::services::{Confirmation, CreateTaskRequest, UpdateTaskRequest};
use serde::Deserialize;

/// Fields posted by the task form and the deletion prompt.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskForm {
    /// Task title.
    pub title: Option<String>,
    /// Selected status; blank counts as absent.
    pub status: Option<String>,
    /// Deadline from the `datetime-local` input.
    pub deadline: Option<String>,
    /// HTML-form method override (`patch`, `put` or `delete`).
    #[serde(rename = "_method")]
    pub method: Option<String>,
    /// Answer to the deletion prompt.
    pub confirmation: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

impl TaskForm {
    /// Builds a creation request. A missing title is submitted as blank so
    /// validation reports it.
    #[must_use]
    pub fn to_create_request(&self) -> CreateTaskRequest {
        let mut request = CreateTaskRequest::new(self.title.clone().unwrap_or_default());
        if let Some(status) = non_blank(self.status.clone()) {
            request = request.with_status(status);
        }
        if let Some(deadline) = self.deadline.clone() {
            request = request.with_deadline(deadline);
        }
        request
    }

    /// Builds an update request touching only the submitted fields.
    #[must_use]
    pub fn to_update_request(&self) -> UpdateTaskRequest {
        let mut request = UpdateTaskRequest::new();
        if let Some(title) = self.title.clone() {
            request = request.with_title(title);
        }
        if let Some(status) = non_blank(self.status.clone()) {
            request = request.with_status(status);
        }
        if let Some(deadline) = self.deadline.clone() {
            request = request.with_deadline(deadline);
        }
        request
    }

    /// Returns the parsed deletion answer, if any.
    #[must_use]
    pub fn confirmation(&self) -> Option<Confirmation> {
        self.confirmation.as_deref().and_then(Confirmation::parse)
    }

    /// Returns the submitted values for re-rendering the form, falling back
    /// to `defaults` for fields that were not posted.
    #[must_use]
    pub fn values_or(&self, defaults: TaskFormValues) -> TaskFormValues {
        TaskFormValues {
            title: self.title.clone().unwrap_or(defaults.title),
            status: non_blank(self.status.clone()).unwrap_or(defaults.status),
            deadline: self.deadline.clone().unwrap_or(defaults.deadline),
        }
    }
}

/// Fields posted by the project form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectForm {
    /// Project name.
    pub name: Option<String>,
}

/// Query string carrying a flash notice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoticeQuery {
    /// Notice key.
    pub notice: Option<String>,
}

impl NoticeQuery {
    /// Resolves the notice message to display.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.notice
            .as_deref()
            .and_then(Notice::from_key)
            .map(Notice::message)
    }
}
