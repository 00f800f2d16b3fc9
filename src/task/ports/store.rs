//! Store port for task persistence and the two recency queries.

use crate::task::domain::{NewTask, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// Callers issue at most one write per logical operation and assume no
/// cross-call transactional guarantee beyond what the backing store gives a
/// single statement.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persists a new task, returning it with the store-assigned key.
    async fn insert(&self, task: NewTask) -> TaskStoreResult<Task>;

    /// Finds a task by primary key.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Persists the mutated fields of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskStoreResult<Task>;

    /// Returns the highest primary key currently stored.
    ///
    /// Returns `None` when the store is empty.
    async fn max_id(&self) -> TaskStoreResult<Option<TaskId>>;

    /// Returns up to `limit` incomplete tasks ordered by key descending.
    async fn recent_incomplete(&self, limit: i64) -> TaskStoreResult<Vec<Task>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
