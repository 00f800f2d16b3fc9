//! Domain model for the task lifecycle.
//!
//! The task domain models creation drafts, the persisted task value, and the
//! single completion transition while keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::{DisplayId, TaskId};
pub use task::{NewTask, PersistedTaskData, Task};
