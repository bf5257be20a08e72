//! `PostgreSQL` repository implementation for task storage.

use super::models::{NewTaskRow, TaskChangesetRow, TaskRow};
use crate::db::{PgPool, schema::tasks};
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{Deadline, NewTask, PersistedTaskData, Task, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed task repository.
///
/// Identifiers come from a `BIGSERIAL` sequence, which never hands out a
/// value twice.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let new_row = to_new_row(&task);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let project_id = task.project_id();
        let changeset = to_changeset(task);
        self.run_blocking(move |connection| {
            let updated = diesel::update(
                tasks::table
                    .filter(tasks::id.eq(task_id.value()))
                    .filter(tasks::project_id.eq(project_id.value())),
            )
            .set(&changeset)
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find(
        &self,
        project_id: ProjectId,
        id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .filter(tasks::project_id.eq(project_id.value()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            tasks::table
                .filter(tasks::project_id.eq(project_id.value()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?
                .into_iter()
                .map(row_to_task)
                .collect()
        })
        .await
    }

    async fn delete(&self, project_id: ProjectId, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(
                tasks::table
                    .filter(tasks::id.eq(id.value()))
                    .filter(tasks::project_id.eq(project_id.value())),
            )
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            Ok(deleted > 0)
        })
        .await
    }

    async fn count(&self) -> TaskRepositoryResult<u64> {
        self.run_blocking(|connection| {
            let total = tasks::table
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(total).map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

fn to_new_row(task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        project_id: task.project_id().value(),
        title: task.title().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        deadline: task.deadline().map(Deadline::value),
        completed_at: task.completed_at(),
        created_at: task.created_at(),
        updated_at: task.created_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangesetRow {
    TaskChangesetRow {
        title: task.title().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        deadline: task.deadline().map(Deadline::value),
        completed_at: task.completed_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        project_id,
        title: persisted_title,
        status,
        deadline,
        completed_at,
        created_at,
        updated_at,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::persistence)?;
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        project_id: ProjectId::new(project_id),
        title,
        status: TaskStatus::from_persisted(status),
        deadline: deadline.map(Deadline::new),
        completed_at,
        created_at,
        updated_at,
    }))
}
