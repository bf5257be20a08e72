//! URL builders for the resource routes.

use crate::project::domain::ProjectId;
use crate::task::domain::TaskId;

/// `/projects`
pub const PROJECTS: &str = "/projects";

/// `/projects/new`
pub const NEW_PROJECT: &str = "/projects/new";

/// `/projects/{project_id}`
#[must_use]
pub fn project(project_id: ProjectId) -> String {
    format!("{PROJECTS}/{project_id}")
}

/// `/projects/{project_id}/tasks`
#[must_use]
pub fn tasks(project_id: ProjectId) -> String {
    format!("{PROJECTS}/{project_id}/tasks")
}

/// `/projects/{project_id}/tasks/new`
#[must_use]
pub fn new_task(project_id: ProjectId) -> String {
    format!("{}/new", tasks(project_id))
}

/// `/projects/{project_id}/tasks/{task_id}`
#[must_use]
pub fn task(project_id: ProjectId, task_id: TaskId) -> String {
    format!("{}/{task_id}", tasks(project_id))
}

/// `/projects/{project_id}/tasks/{task_id}/edit`
#[must_use]
pub fn edit_task(project_id: ProjectId, task_id: TaskId) -> String {
    format!("{}/edit", task(project_id, task_id))
}

/// `/projects/{project_id}/tasks/{task_id}/delete`
#[must_use]
pub fn delete_task(project_id: ProjectId, task_id: TaskId) -> String {
    format!("{}/delete", task(project_id, task_id))
}

/// Appends a `notice` query parameter to a path.
#[must_use]
pub fn with_notice(path: &str, notice: super::views::Notice) -> String {
    format!("{path}?notice={}", notice.key())
}
