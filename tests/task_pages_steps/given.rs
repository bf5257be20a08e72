//! Given steps for task page BDD scenarios.

use super::world::{TaskPagesWorld, run_async};
use chrono::{Datelike, NaiveDate};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::services::{CreateTaskRequest, UpdateTaskRequest};

#[given(r#"a project "{name}" with a task "{title}""#)]
fn project_with_task(
    world: &mut TaskPagesWorld,
    name: String,
    title: String,
) -> Result<(), eyre::Report> {
    let project = run_async(world.app.state.projects().create(name))
        .wrap_err("create project for scenario")?;
    let task = run_async(
        world
            .app
            .state
            .tasks()
            .create(project.id(), CreateTaskRequest::new(title)),
    )
    .wrap_err("create task for scenario")?;
    world.project = Some(project);
    world.task = Some(task);
    Ok(())
}

fn update_task(world: &mut TaskPagesWorld, request: UpdateTaskRequest) -> Result<(), eyre::Report> {
    let task = world.task()?;
    let updated = run_async(
        world
            .app
            .state
            .tasks()
            .update(task.project_id(), task.id(), request),
    )
    .wrap_err("update scenario task")?;
    world.task = Some(updated);
    Ok(())
}

#[given(r#"the task is due "{deadline}""#)]
fn task_is_due(world: &mut TaskPagesWorld, deadline: String) -> Result<(), eyre::Report> {
    update_task(world, UpdateTaskRequest::new().with_deadline(deadline))
}

#[given("the task is done")]
fn task_is_done(world: &mut TaskPagesWorld) -> Result<(), eyre::Report> {
    update_task(world, UpdateTaskRequest::new().with_status("done"))
}

#[given(r#"today is "{date}""#)]
fn today_is(world: &mut TaskPagesWorld, date: String) -> Result<(), eyre::Report> {
    let day = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .wrap_err_with(|| format!("invalid scenario date {date}"))?;
    world.app.clock.set(day.year(), day.month(), day.day(), 9, 0);
    Ok(())
}
