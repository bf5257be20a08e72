//! Task persistence against `PostgreSQL`.

use super::helpers::{BoxError, PgContext, context};
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::project::domain::ProjectId;
use taskboard::task::{
    domain::{Deadline, NewTask, StatusCatalog, TaskChanges, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};

fn new_task(project_id: ProjectId, title: &str, deadline: &str) -> Result<NewTask, BoxError> {
    let catalog = StatusCatalog::default();
    Ok(NewTask::new(
        project_id,
        TaskTitle::new(title)?,
        catalog.default_status().clone(),
        Deadline::parse(deadline)?,
        &catalog,
        &DefaultClock,
    ))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn inserted_tasks_round_trip_through_the_table(
    context: Option<PgContext>,
) -> Result<(), BoxError> {
    let Some(ctx) = context else { return Ok(()) };
    let project = ctx.project("pg tasks").await?;

    let first = ctx.tasks.insert(new_task(project.id(), "first", "2024-01-05 09:30")?).await?;
    let second = ctx.tasks.insert(new_task(project.id(), "second", "")?).await?;

    let listed = ctx.tasks.list_by_project(project.id()).await?;
    assert_eq!(listed, vec![first.clone(), second.clone()]);
    assert!(second.id() > first.id());
    assert_eq!(
        first.deadline().map(|d| d.value().to_string()),
        Some("2024-01-05 09:30:00".to_owned())
    );
    assert!(second.deadline().is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_stamps_and_keeps_completion(context: Option<PgContext>) -> Result<(), BoxError> {
    let Some(ctx) = context else { return Ok(()) };
    let project = ctx.project("pg update").await?;
    let catalog = StatusCatalog::default();
    let mut task = ctx.tasks.insert(new_task(project.id(), "finish", "")?).await?;

    let done = TaskChanges {
        status: Some(catalog.done_status().clone()),
        ..TaskChanges::default()
    };
    assert!(task.apply(done, &catalog, &DefaultClock));
    ctx.tasks.update(&task).await?;
    let reopen = TaskChanges {
        status: Some(catalog.default_status().clone()),
        ..TaskChanges::default()
    };
    assert!(!task.apply(reopen, &catalog, &DefaultClock));
    ctx.tasks.update(&task).await?;

    let stored = ctx
        .tasks
        .find(project.id(), task.id())
        .await?
        .ok_or("task missing after update")?;
    assert_eq!(stored.status().as_str(), "todo");
    assert_eq!(
        stored.completed_at().map(|at| at.timestamp()),
        task.completed_at().map(|at| at.timestamp())
    );
    assert!(stored.completed_at().is_some());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deletion_is_scoped_to_the_owner(context: Option<PgContext>) -> Result<(), BoxError> {
    let Some(ctx) = context else { return Ok(()) };
    let owner = ctx.project("pg owner").await?;
    let stranger = ctx.project("pg stranger").await?;
    let task = ctx.tasks.insert(new_task(owner.id(), "owned", "")?).await?;

    assert!(ctx.tasks.find(stranger.id(), task.id()).await?.is_none());
    assert!(!ctx.tasks.delete(stranger.id(), task.id()).await?);
    assert!(ctx.tasks.delete(owner.id(), task.id()).await?);
    assert!(matches!(
        ctx.tasks.update(&task).await,
        Err(TaskRepositoryError::NotFound(id)) if id == task.id()
    ));
    Ok(())
}
