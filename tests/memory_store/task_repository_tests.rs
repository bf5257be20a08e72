//! Task repository behaviour over in-memory storage.

use super::helpers::{new_task, tasks};
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::project::domain::ProjectId;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{StatusCatalog, TaskChanges, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};

#[rstest]
#[tokio::test]
async fn list_is_scoped_and_ordered(tasks: InMemoryTaskRepository) {
    let home = ProjectId::new(1);
    let work = ProjectId::new(2);
    for (project, title) in [(home, "a"), (work, "b"), (home, "c")] {
        tasks.insert(new_task(project, title)).await.expect("insert");
    }

    let listed = tasks.list_by_project(home).await.expect("list");

    let titles: Vec<&str> = listed.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(titles, ["a", "c"]);
    assert_eq!(tasks.count().await.expect("count"), 3);
}

#[rstest]
#[tokio::test]
async fn find_and_delete_respect_ownership(tasks: InMemoryTaskRepository) {
    let owner = ProjectId::new(1);
    let stranger = ProjectId::new(2);
    let task = tasks.insert(new_task(owner, "mine")).await.expect("insert");

    assert!(tasks.find(stranger, task.id()).await.expect("find").is_none());
    assert!(!tasks.delete(stranger, task.id()).await.expect("delete"));
    assert!(tasks.find(owner, task.id()).await.expect("find").is_some());
    assert!(tasks.delete(owner, task.id()).await.expect("delete"));
    assert_eq!(tasks.count().await.expect("count"), 0);
}

#[rstest]
#[tokio::test]
async fn update_persists_changes(tasks: InMemoryTaskRepository) {
    let project = ProjectId::new(1);
    let mut task = tasks.insert(new_task(project, "draft")).await.expect("insert");
    let catalog = StatusCatalog::default();
    let changes = TaskChanges {
        status: Some(catalog.done_status().clone()),
        deadline: Some(None),
        ..TaskChanges::default()
    };
    let completed = task.apply(changes, &catalog, &DefaultClock);
    assert!(completed);

    tasks.update(&task).await.expect("update");

    let stored = tasks
        .find(project, task.id())
        .await
        .expect("find")
        .expect("task exists");
    assert_eq!(stored.status().as_str(), "done");
    assert!(stored.deadline().is_none());
    assert!(stored.completed_at().is_some());
}

#[rstest]
#[tokio::test]
async fn updating_a_deleted_task_reports_not_found(tasks: InMemoryTaskRepository) {
    let project = ProjectId::new(1);
    let task = tasks.insert(new_task(project, "gone")).await.expect("insert");
    tasks.delete(project, task.id()).await.expect("delete");

    let result = tasks.update(&task).await;

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == task.id()));
}

#[rstest]
#[tokio::test]
async fn identifiers_are_never_reused(tasks: InMemoryTaskRepository) {
    let project = ProjectId::new(1);
    let first = tasks.insert(new_task(project, "one")).await.expect("insert");
    let second = tasks.insert(new_task(project, "two")).await.expect("insert");
    tasks.delete(project, second.id()).await.expect("delete");

    let third = tasks.insert(new_task(project, "three")).await.expect("insert");

    assert_eq!(first.id(), TaskId::new(1));
    assert_eq!(third.id(), TaskId::new(3));
}
