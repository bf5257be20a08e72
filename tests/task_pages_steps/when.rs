//! When steps for task page BDD scenarios.

use super::world::{TaskPagesWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

fn visit(world: &mut TaskPagesWorld, path: &str) -> Result<(), eyre::Report> {
    world.baseline_count = run_async(world.app.task_count());
    run_async(world.browser.visit(path)).wrap_err_with(|| format!("visit {path}"))
}

#[when("I visit the task list")]
fn visit_task_list(world: &mut TaskPagesWorld) -> Result<(), eyre::Report> {
    let path = world.tasks_path()?;
    visit(world, &path)
}

#[when("I visit the project page")]
fn visit_project_page(world: &mut TaskPagesWorld) -> Result<(), eyre::Report> {
    let path = format!("/projects/{}", world.project()?.id());
    visit(world, &path)
}

#[when("I visit the task page")]
fn visit_task_page(world: &mut TaskPagesWorld) -> Result<(), eyre::Report> {
    let path = world.task_path()?;
    visit(world, &path)
}

#[when("I visit the task edit page")]
fn visit_task_edit_page(world: &mut TaskPagesWorld) -> Result<(), eyre::Report> {
    let path = format!("{}/edit", world.task_path()?);
    visit(world, &path)
}

#[when(r#"I click "{text}""#)]
fn click(world: &mut TaskPagesWorld, text: String) -> Result<(), eyre::Report> {
    run_async(world.browser.click_link(&text))
}

#[when(r#"I fill in "{label}" with "{value}""#)]
fn fill_in(world: &mut TaskPagesWorld, label: String, value: String) -> Result<(), eyre::Report> {
    world.browser.fill_in(&label, &value)
}

#[when(r#"I select "{option}" from "{label}""#)]
fn select(world: &mut TaskPagesWorld, option: String, label: String) -> Result<(), eyre::Report> {
    world.browser.select(&option, &label)
}

#[when(r#"I press "{label}""#)]
fn press(world: &mut TaskPagesWorld, label: String) -> Result<(), eyre::Report> {
    run_async(world.browser.click_button(&label))
}
