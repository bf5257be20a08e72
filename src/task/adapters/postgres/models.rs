//! Diesel row models for task persistence.

use crate::db::schema::tasks;
use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i64,
    /// Owning project.
    pub project_id: i64,
    /// Task title.
    pub title: String,
    /// Status name.
    pub status: String,
    /// Optional deadline.
    pub deadline: Option<NaiveDateTime>,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Owning project.
    pub project_id: i64,
    /// Task title.
    pub title: String,
    /// Status name.
    pub status: String,
    /// Optional deadline.
    pub deadline: Option<NaiveDateTime>,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset for the mutable task columns.
///
/// `treat_none_as_null` lets a cleared deadline reach the database.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangesetRow {
    /// Task title.
    pub title: String,
    /// Status name.
    pub status: String,
    /// Optional deadline.
    pub deadline: Option<NaiveDateTime>,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
