//! `PostgreSQL` store implementation for task persistence.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{DisplayId, NewTask, PersistedTaskData, Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn insert(&self, task: NewTask) -> TaskStoreResult<Task> {
        let new_row = to_new_row(&task);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            Ok(row_to_task(row))
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskStoreError::persistence)?;
            Ok(row.map(row_to_task))
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<Task> {
        let id = task.id();
        let completed = task.is_completed();

        self.run_blocking(move |connection| {
            // `completed` is the only mutable column; a single-column update
            // keeps the one-write-per-operation contract.
            let row = diesel::update(tasks::table.find(id.into_inner()))
                .set(tasks::completed.eq(completed))
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskStoreError::persistence)?
                .ok_or(TaskStoreError::NotFound(id))?;
            Ok(row_to_task(row))
        })
        .await
    }

    async fn max_id(&self) -> TaskStoreResult<Option<TaskId>> {
        self.run_blocking(move |connection| {
            let value = tasks::table
                .select(diesel::dsl::max(tasks::id))
                .first::<Option<i64>>(connection)
                .map_err(TaskStoreError::persistence)?;
            Ok(value.map(TaskId::new))
        })
        .await
    }

    async fn recent_incomplete(&self, limit: i64) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::completed.eq(false))
                .order(tasks::id.desc())
                .limit(limit)
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }
}

fn to_new_row(task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        task_id: task.display_id().as_str().to_owned(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        created_at: task.created_at(),
        completed: false,
    }
}

fn row_to_task(row: TaskRow) -> Task {
    let TaskRow {
        id,
        task_id,
        title,
        description,
        created_at,
        completed,
    } = row;

    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        display_id: DisplayId::from_persisted(task_id),
        title,
        description,
        created_at,
        completed,
    })
}
