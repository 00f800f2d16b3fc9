//! In-memory adapter for task persistence.

mod task;

pub use task::InMemoryTaskStore;
