//! Service layer orchestrating task creation, recency listing, and
//! completion.

use super::DisplayIdGenerator;
use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId},
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Fixed upper bound for the recent-task listing.
pub const RECENT_TASK_LIMIT: i64 = 5;

/// Recent-listing result: a summary message and the matching tasks.
///
/// Tasks preserve the store's descending-key order; the service never
/// re-sorts them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentTasks {
    /// Summary message describing the result.
    pub message: String,
    /// Up to [`RECENT_TASK_LIMIT`] incomplete tasks, newest first.
    pub tasks: Vec<Task>,
}

/// Completion result: a confirmation message and the updated task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTask {
    /// Confirmation message.
    pub message: String,
    /// The task as persisted after the transition.
    pub task: Task,
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// No task exists with the given key.
    #[error("Task {0} not found")]
    NotFound(TaskId),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    generator: DisplayIdGenerator<S>,
    clock: Arc<C>,
}

impl<S, C> TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        let generator = DisplayIdGenerator::new(Arc::clone(&store));
        Self {
            store,
            generator,
            clock,
        }
    }

    /// Creates a new incomplete task with a freshly derived display
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when title or description is
    /// blank, or [`TaskLifecycleError::Store`] when persistence fails.
    pub async fn create(
        &self,
        title: impl Into<String> + Send,
        description: impl Into<String> + Send,
    ) -> TaskLifecycleResult<Task> {
        let display_id = self.generator.generate().await?;
        let draft = NewTask::new(display_id, title, description, &*self.clock)?;
        Ok(self.store.insert(draft).await?)
    }

    /// Lists up to [`RECENT_TASK_LIMIT`] incomplete tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the store query fails.
    pub async fn find_recent(&self) -> TaskLifecycleResult<RecentTasks> {
        let tasks = self.store.recent_incomplete(RECENT_TASK_LIMIT).await?;
        let message = if tasks.is_empty() {
            "No tasks found".to_owned()
        } else {
            format!("No of tasks found : {}", tasks.len())
        };
        Ok(RecentTasks { message, tasks })
    }

    /// Marks the task with the given key as completed.
    ///
    /// Completing an already-completed task is not rejected: the flag is
    /// re-persisted and the operation succeeds again.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the key, or
    /// [`TaskLifecycleError::Store`] when persistence fails.
    pub async fn complete(&self, id: TaskId) -> TaskLifecycleResult<CompletedTask> {
        let task = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))?;
        let task = self.store.update(&task.into_completed()).await?;
        Ok(CompletedTask {
            message: "Task has been completed".to_owned(),
            task,
        })
    }
}
