//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned primary key.
    pub id: i64,
    /// Display identifier.
    pub task_id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Completion flag.
    pub completed: bool,
}

/// Insert model for task records.
///
/// The primary key is omitted; the identity column assigns it atomically.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Display identifier.
    pub task_id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Completion flag.
    pub completed: bool,
}
