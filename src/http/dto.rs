//! Request and response DTOs for the REST surface.
//!
//! JSON field names are camelCase; the wire shapes are part of the public
//! API contract and independent of the domain types.

use crate::task::domain::Task;
use crate::task::services::{CompletedTask, RecentTasks};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for task creation.
///
/// Fields are optional so that omission, explicit `null`, and blank input
/// all surface the same validation failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddTaskRequest {
    /// Task title.
    #[serde(default)]
    pub title: Option<String>,
    /// Task description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Task representation on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    /// Store-assigned primary key.
    pub id: i64,
    /// Display identifier (`TSK {n}`).
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

impl From<Task> for TaskDto {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().into_inner(),
            task_id: task.display_id().as_str().to_owned(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            created_at: task.created_at(),
            completed: task.is_completed(),
        }
    }
}

/// Response body for the recent-task listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    /// Summary message.
    pub message: String,
    /// Matching tasks, newest first.
    pub entity_list: Vec<TaskDto>,
}

impl From<RecentTasks> for ListResponse {
    fn from(recent: RecentTasks) -> Self {
        Self {
            message: recent.message,
            entity_list: recent.tasks.into_iter().map(TaskDto::from).collect(),
        }
    }
}

/// Response body for task completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteResponse {
    /// Confirmation message.
    pub message: String,
    /// The updated task.
    pub task: TaskDto,
}

impl From<CompletedTask> for CompleteResponse {
    fn from(completed: CompletedTask) -> Self {
        Self {
            message: completed.message,
            task: TaskDto::from(completed.task),
        }
    }
}

/// Uniform error body for all failure responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// HTTP status code.
    pub status: u16,
    /// Human-readable failure message.
    pub message: String,
    /// Epoch milliseconds at response time.
    pub time_stamp: i64,
}
