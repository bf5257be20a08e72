//! Request handlers for the task pages.

use super::forms::{NoticeQuery, TaskForm};
use super::views::{Notice, ProjectView, TaskFormValues, TaskFormView, TaskView};
use super::{AppState, WebError, paths};
use crate::project::domain::{Project, ProjectId};
use crate::task::domain::{Task, TaskId};
use crate::task::services::{DeletionOutcome, TaskServiceError};
use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use minijinja::{Value, context};

type ProjectPath = Result<Path<i64>, PathRejection>;
type TaskPath = Result<Path<(i64, i64)>, PathRejection>;

fn parse_project_id(path: ProjectPath) -> Result<ProjectId, WebError> {
    path.map(|Path(id)| ProjectId::new(id))
        .map_err(|_| WebError::NotFound)
}

fn parse_task_ids(path: TaskPath) -> Result<(ProjectId, TaskId), WebError> {
    path.map(|Path((project, task))| (ProjectId::new(project), TaskId::new(task)))
        .map_err(|_| WebError::NotFound)
}

fn redirect(path: &str) -> Response {
    Redirect::to(path).into_response()
}

fn render_form(
    state: &AppState,
    form: TaskFormView,
    status: StatusCode,
) -> Result<Response, WebError> {
    let html = state.views.render("tasks/form.html", context! { form => form })?;
    Ok((status, Html(html)).into_response())
}

/// `GET /projects/{project_id}/tasks`
pub async fn index(
    State(state): State<AppState>,
    path: ProjectPath,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>, WebError> {
    let project_id = parse_project_id(path)?;
    let project = state.projects.get(project_id).await?;
    let tasks: Vec<TaskView> = state
        .tasks
        .list(project_id)
        .await?
        .iter()
        .map(TaskView::new)
        .collect();
    let html = state.views.render(
        "tasks/index.html",
        context! {
            notice => query.message(),
            project => ProjectView::new(&project),
            tasks => tasks,
            new_task_path => Value::from_safe_string(paths::new_task(project_id)),
        },
    )?;
    Ok(Html(html))
}

/// `GET /projects/{project_id}/tasks/new`
pub async fn new_form(
    State(state): State<AppState>,
    path: ProjectPath,
) -> Result<Response, WebError> {
    let project = state.projects.get(parse_project_id(path)?).await?;
    let form = blank_form(&state, &project, &TaskForm::default(), Vec::new());
    render_form(&state, form, StatusCode::OK)
}

fn blank_form(
    state: &AppState,
    project: &Project,
    submitted: &TaskForm,
    errors: Vec<String>,
) -> TaskFormView {
    let values = submitted.values_or(TaskFormValues {
        status: state.tasks.statuses().default_status().to_string(),
        ..TaskFormValues::default()
    });
    TaskFormView::new_task(project, values, state.tasks.statuses(), errors)
}

/// `POST /projects/{project_id}/tasks`
pub async fn create(
    State(state): State<AppState>,
    path: ProjectPath,
    Form(form): Form<TaskForm>,
) -> Result<Response, WebError> {
    let project = state.projects.get(parse_project_id(path)?).await?;
    match state.tasks.create(project.id(), form.to_create_request()).await {
        Ok(task) => {
            let target = paths::task(project.id(), task.id());
            Ok(redirect(&paths::with_notice(&target, Notice::TaskCreated)))
        }
        Err(TaskServiceError::Validation(errors)) => {
            let view = blank_form(&state, &project, &form, errors.messages());
            render_form(&state, view, StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(err) => Err(err.into()),
    }
}

/// `GET /projects/{project_id}/tasks/{task_id}`
pub async fn show(
    State(state): State<AppState>,
    path: TaskPath,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>, WebError> {
    let (project_id, task_id) = parse_task_ids(path)?;
    let task = state.tasks.get(project_id, task_id).await?;
    let html = state.views.render(
        "tasks/show.html",
        context! {
            notice => query.message(),
            task => TaskView::new(&task),
            tasks_path => Value::from_safe_string(paths::tasks(project_id)),
        },
    )?;
    Ok(Html(html))
}

/// `GET /projects/{project_id}/tasks/{task_id}/edit`
pub async fn edit(State(state): State<AppState>, path: TaskPath) -> Result<Response, WebError> {
    let (project_id, task_id) = parse_task_ids(path)?;
    let task = state.tasks.get(project_id, task_id).await?;
    let form = TaskFormView::edit_task(
        &task,
        TaskFormValues::from_task(&task),
        state.tasks.statuses(),
        Vec::new(),
    );
    render_form(&state, form, StatusCode::OK)
}

/// `PATCH`/`PUT /projects/{project_id}/tasks/{task_id}`
pub async fn update(
    State(state): State<AppState>,
    path: TaskPath,
    Form(form): Form<TaskForm>,
) -> Result<Response, WebError> {
    let (project_id, task_id) = parse_task_ids(path)?;
    apply_update(&state, project_id, task_id, &form).await
}

async fn apply_update(
    state: &AppState,
    project_id: ProjectId,
    task_id: TaskId,
    form: &TaskForm,
) -> Result<Response, WebError> {
    match state
        .tasks
        .update(project_id, task_id, form.to_update_request())
        .await
    {
        Ok(task) => {
            let target = paths::task(project_id, task.id());
            Ok(redirect(&paths::with_notice(&target, Notice::TaskUpdated)))
        }
        Err(TaskServiceError::Validation(errors)) => {
            let task = state.tasks.get(project_id, task_id).await?;
            let view = edit_form_with_errors(state, &task, form, errors.messages());
            render_form(state, view, StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(err) => Err(err.into()),
    }
}

fn edit_form_with_errors(
    state: &AppState,
    task: &Task,
    form: &TaskForm,
    errors: Vec<String>,
) -> TaskFormView {
    let values = form.values_or(TaskFormValues::from_task(task));
    TaskFormView::edit_task(task, values, state.tasks.statuses(), errors)
}

/// `GET /projects/{project_id}/tasks/{task_id}/delete`
///
/// First step of deletion: asks the user to confirm.
pub async fn confirm_delete(
    State(state): State<AppState>,
    path: TaskPath,
) -> Result<Html<String>, WebError> {
    let (project_id, task_id) = parse_task_ids(path)?;
    let request = state.tasks.request_deletion(project_id, task_id).await?;
    let html = state.views.render(
        "tasks/delete.html",
        context! {
            task => TaskView::new(request.task()),
            tasks_path => Value::from_safe_string(paths::tasks(project_id)),
        },
    )?;
    Ok(Html(html))
}

/// `DELETE /projects/{project_id}/tasks/{task_id}`
///
/// Second step of deletion. Without a confirmation answer the user is sent
/// back to the prompt.
pub async fn destroy(
    State(state): State<AppState>,
    path: TaskPath,
    form: Result<Form<TaskForm>, FormRejection>,
) -> Result<Response, WebError> {
    let (project_id, task_id) = parse_task_ids(path)?;
    let fields = form.map(|Form(fields)| fields).unwrap_or_default();
    apply_destroy(&state, project_id, task_id, &fields).await
}

async fn apply_destroy(
    state: &AppState,
    project_id: ProjectId,
    task_id: TaskId,
    form: &TaskForm,
) -> Result<Response, WebError> {
    let request = state.tasks.request_deletion(project_id, task_id).await?;
    let Some(confirmation) = form.confirmation() else {
        return Ok(redirect(&paths::delete_task(project_id, task_id)));
    };
    let list = paths::tasks(project_id);
    match state.tasks.confirm_deletion(request, confirmation).await? {
        DeletionOutcome::Deleted(_) => Ok(redirect(&paths::with_notice(
            &list,
            Notice::TaskDestroyed,
        ))),
        DeletionOutcome::Cancelled(_) => Ok(redirect(&list)),
    }
}

/// `POST /projects/{project_id}/tasks/{task_id}`
///
/// HTML forms can only submit `GET` and `POST`; the hidden `_method` field
/// selects the update or delete action.
pub async fn override_method(
    State(state): State<AppState>,
    path: TaskPath,
    Form(form): Form<TaskForm>,
) -> Result<Response, WebError> {
    let (project_id, task_id) = parse_task_ids(path)?;
    let method = form
        .method
        .as_deref()
        .map(|raw| raw.trim().to_ascii_lowercase());
    match method.as_deref() {
        Some("patch" | "put") => apply_update(&state, project_id, task_id, &form).await,
        Some("delete") => apply_destroy(&state, project_id, task_id, &form).await,
        _ => Err(WebError::MethodNotAllowed),
    }
}
