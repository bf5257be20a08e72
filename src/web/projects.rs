//! Request handlers for the project pages.

use super::forms::{NoticeQuery, ProjectForm};
use super::views::{Notice, ProjectView};
use super::{AppState, WebError, paths};
use crate::project::domain::ProjectId;
use crate::project::services::ProjectServiceError;
use axum::extract::rejection::PathRejection;
use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use minijinja::{Value, context};

/// `GET /`
#[expect(clippy::unused_async, reason = "axum handlers are async")]
pub async fn root() -> Redirect {
    Redirect::to(paths::PROJECTS)
}

/// `GET /projects`
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>, WebError> {
    let projects: Vec<ProjectView> = state
        .projects
        .list()
        .await?
        .iter()
        .map(ProjectView::new)
        .collect();
    let html = state.views.render(
        "projects/index.html",
        context! {
            notice => query.message(),
            projects => projects,
            new_project_path => Value::from_safe_string(paths::NEW_PROJECT.to_owned()),
        },
    )?;
    Ok(Html(html))
}

fn render_form(
    state: &AppState,
    name: &str,
    errors: Vec<String>,
    status: StatusCode,
) -> Result<Response, WebError> {
    let html = state.views.render(
        "projects/form.html",
        context! {
            name => name,
            errors => errors,
            action => Value::from_safe_string(paths::PROJECTS.to_owned()),
        },
    )?;
    Ok((status, Html(html)).into_response())
}

/// `GET /projects/new`
#[expect(clippy::unused_async, reason = "axum handlers are async")]
pub async fn new_form(State(state): State<AppState>) -> Result<Response, WebError> {
    render_form(&state, "", Vec::new(), StatusCode::OK)
}

/// `POST /projects`
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProjectForm>,
) -> Result<Response, WebError> {
    let name = form.name.unwrap_or_default();
    match state.projects.create(name.as_str()).await {
        Ok(project) => {
            let target = paths::project(project.id());
            Ok(Redirect::to(&paths::with_notice(&target, Notice::ProjectCreated)).into_response())
        }
        Err(ProjectServiceError::Validation(err)) => render_form(
            &state,
            &name,
            vec![err.to_string()],
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        Err(err) => Err(err.into()),
    }
}

/// `GET /projects/{project_id}`
pub async fn show(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>, WebError> {
    let Path(raw_id) = path.map_err(|_| WebError::NotFound)?;
    let project = state.projects.get(ProjectId::new(raw_id)).await?;
    let html = state.views.render(
        "projects/show.html",
        context! {
            notice => query.message(),
            project => ProjectView::new(&project),
            projects_path => Value::from_safe_string(paths::PROJECTS.to_owned()),
        },
    )?;
    Ok(Html(html))
}
