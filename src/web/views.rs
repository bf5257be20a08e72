//! HTML rendering with embedded `minijinja` templates.
//!
//! Paths and formatted dates are produced by the application itself and are
//! marked safe so the HTML escaper leaves their slashes alone. User input
//! such as titles and names is always escaped.

use super::format;
use super::paths;
use crate::project::domain::Project;
use crate::task::domain::{StatusCatalog, Task};
use minijinja::{Environment, Value};
use serde::Serialize;

const TEMPLATES: [(&str, &str); 8] = [
    ("layout.html", include_str!("../../templates/layout.html")),
    ("tasks/index.html", include_str!("../../templates/tasks/index.html")),
    ("tasks/show.html", include_str!("../../templates/tasks/show.html")),
    ("tasks/form.html", include_str!("../../templates/tasks/form.html")),
    ("tasks/delete.html", include_str!("../../templates/tasks/delete.html")),
    ("projects/index.html", include_str!("../../templates/projects/index.html")),
    ("projects/show.html", include_str!("../../templates/projects/show.html")),
    ("projects/form.html", include_str!("../../templates/projects/form.html")),
];

/// Compiled page templates.
#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Compiles every embedded template.
    ///
    /// # Errors
    ///
    /// Returns a template syntax error if any template fails to compile.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns the template error when the template is missing or rendering
    /// fails.
    pub fn render(&self, name: &str, context: impl Serialize) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(context)
    }
}

/// Flash message carried across a redirect as a `notice` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A task was created.
    TaskCreated,
    /// A task was updated.
    TaskUpdated,
    /// A task was deleted.
    TaskDestroyed,
    /// A project was created.
    ProjectCreated,
}

impl Notice {
    const ALL: [Self; 4] = [
        Self::TaskCreated,
        Self::TaskUpdated,
        Self::TaskDestroyed,
        Self::ProjectCreated,
    ];

    /// Returns the query-string key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::TaskCreated => "task_created",
            Self::TaskUpdated => "task_updated",
            Self::TaskDestroyed => "task_destroyed",
            Self::ProjectCreated => "project_created",
        }
    }

    /// Returns the message shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TaskCreated => "Task was successfully created.",
            Self::TaskUpdated => "Task was successfully updated.",
            Self::TaskDestroyed => "Task was successfully destroyed.",
            Self::ProjectCreated => "Project was successfully created.",
        }
    }

    /// Looks a notice up by key; unknown keys are ignored.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|notice| notice.key() == key)
    }
}

fn safe(value: String) -> Value {
    Value::from_safe_string(value)
}

/// Task as shown on list, detail and confirmation pages.
#[derive(Debug, Serialize)]
pub struct TaskView {
    id: i64,
    title: String,
    status: String,
    deadline: Option<Value>,
    deadline_short: Option<Value>,
    completed_on: Option<Value>,
    show_path: Value,
    edit_path: Value,
    delete_path: Value,
}

impl TaskView {
    /// Builds the view of a task.
    #[must_use]
    pub fn new(task: &Task) -> Self {
        let project_id = task.project_id();
        let task_id = task.id();
        Self {
            id: task_id.value(),
            title: task.title().to_string(),
            status: task.status().to_string(),
            deadline: task.deadline().map(|d| safe(format::deadline_long(d))),
            deadline_short: task.deadline().map(|d| safe(format::deadline_short(d))),
            completed_on: task.completed_at().map(|at| safe(format::completed_on(at))),
            show_path: safe(paths::task(project_id, task_id)),
            edit_path: safe(paths::edit_task(project_id, task_id)),
            delete_path: safe(paths::delete_task(project_id, task_id)),
        }
    }
}

/// Project as shown on project pages.
#[derive(Debug, Serialize)]
pub struct ProjectView {
    id: i64,
    name: String,
    path: Value,
    tasks_path: Value,
}

impl ProjectView {
    /// Builds the view of a project.
    #[must_use]
    pub fn new(project: &Project) -> Self {
        Self {
            id: project.id().value(),
            name: project.name().to_string(),
            path: safe(paths::project(project.id())),
            tasks_path: safe(paths::tasks(project.id())),
        }
    }
}

/// Values and target of a task form.
#[derive(Debug, Serialize)]
pub struct TaskFormView {
    heading: &'static str,
    action: Value,
    method: &'static str,
    submit_label: &'static str,
    title: String,
    status: String,
    deadline: String,
    statuses: Vec<String>,
    errors: Vec<String>,
    back_path: Value,
}

/// Raw field values echoed back into a task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFormValues {
    /// Title field.
    pub title: String,
    /// Selected status.
    pub status: String,
    /// Deadline field.
    pub deadline: String,
}

impl TaskFormValues {
    /// Pre-fills the form from a stored task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().to_string(),
            status: task.status().to_string(),
            deadline: task
                .deadline()
                .map(format::deadline_input)
                .unwrap_or_default(),
        }
    }
}

impl TaskFormView {
    /// Form for a new task in the given project.
    #[must_use]
    pub fn new_task(
        project: &Project,
        values: TaskFormValues,
        catalog: &StatusCatalog,
        errors: Vec<String>,
    ) -> Self {
        Self {
            heading: "New Task",
            action: safe(paths::tasks(project.id())),
            method: "post",
            submit_label: "Create Task",
            title: values.title,
            status: values.status,
            deadline: values.deadline,
            statuses: catalog.iter().map(ToString::to_string).collect(),
            errors,
            back_path: safe(paths::tasks(project.id())),
        }
    }

    /// Form for editing an existing task.
    #[must_use]
    pub fn edit_task(
        task: &Task,
        values: TaskFormValues,
        catalog: &StatusCatalog,
        errors: Vec<String>,
    ) -> Self {
        Self {
            heading: "Editing Task",
            action: safe(paths::task(task.project_id(), task.id())),
            method: "patch",
            submit_label: "Update Task",
            title: values.title,
            status: values.status,
            deadline: values.deadline,
            statuses: catalog.iter().map(ToString::to_string).collect(),
            errors,
            back_path: safe(paths::task(task.project_id(), task.id())),
        }
    }
}
