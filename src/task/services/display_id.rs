//! Sequential display identifier derivation.

use crate::task::{
    domain::{DisplayId, TaskId},
    ports::{TaskStore, TaskStoreResult},
};
use std::sync::Arc;

/// Derives the next `TSK {n}` display identifier from the highest stored key.
///
/// The derivation is read-then-compute: two concurrent `generate` calls can
/// observe the same maximum and produce the same display identifier. The
/// primary key itself stays unique regardless, since the store assigns it
/// atomically. Removing the window would require an atomic counter in the
/// store; the current contract deliberately keeps the store read-only here.
#[derive(Debug, Clone)]
pub struct DisplayIdGenerator<S> {
    store: Arc<S>,
}

impl<S> DisplayIdGenerator<S>
where
    S: TaskStore,
{
    /// Creates a generator reading from the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the display identifier for the next task.
    ///
    /// An empty store yields `TSK 1`.
    ///
    /// # Errors
    ///
    /// Propagates the store failure when the maximum-key lookup fails.
    pub async fn generate(&self) -> TaskStoreResult<DisplayId> {
        let max_id = self.store.max_id().await?.map_or(0, TaskId::into_inner);
        Ok(DisplayId::from_sequence(max_id + 1))
    }
}
