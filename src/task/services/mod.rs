//! Application services for task lifecycle orchestration.

mod display_id;
mod lifecycle;

pub use display_id::DisplayIdGenerator;
pub use lifecycle::{
    CompletedTask, RECENT_TASK_LIMIT, RecentTasks, TaskLifecycleError, TaskLifecycleResult,
    TaskLifecycleService,
};
