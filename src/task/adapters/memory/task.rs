//! In-memory task store for tests and local runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Keys are assigned from a monotonically increasing counter, mirroring the
/// identity column of the `PostgreSQL` adapter: keys keep ascending even if
/// the highest row were ever removed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<i64, Task>,
    next_id: i64,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, task: NewTask) -> TaskStoreResult<Task> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        state.next_id += 1;
        let id = state.next_id;
        let task = task.into_task(TaskId::new(id));
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.tasks.get(&id.into_inner()).cloned())
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<Task> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let key = task.id().into_inner();
        if !state.tasks.contains_key(&key) {
            return Err(TaskStoreError::NotFound(task.id()));
        }
        state.tasks.insert(key, task.clone());
        Ok(task.clone())
    }

    async fn max_id(&self) -> TaskStoreResult<Option<TaskId>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state
            .tasks
            .last_key_value()
            .map(|(key, _)| TaskId::new(*key)))
    }

    async fn recent_incomplete(&self, limit: i64) -> TaskStoreResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let capacity = usize::try_from(limit).unwrap_or(0);
        Ok(state
            .tasks
            .values()
            .rev()
            .filter(|task| !task.is_completed())
            .take(capacity)
            .cloned()
            .collect())
    }
}
