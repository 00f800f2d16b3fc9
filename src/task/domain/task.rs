//! Task value types and the completion transition.

use super::{DisplayId, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A validated task draft awaiting its store-assigned primary key.
///
/// Title and description are checked for non-emptiness after trimming, but
/// stored with their original whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    display_id: DisplayId,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Creates a validated task draft with `created_at` taken from the clock.
    ///
    /// When both fields are blank only the title violation is reported.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::EmptyDescription`] when the corresponding field is
    /// empty after trimming.
    pub fn new(
        display_id: DisplayId,
        title: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let description = description.into();
        if description.trim().is_empty() {
            return Err(TaskDomainError::EmptyDescription);
        }

        Ok(Self {
            display_id,
            title,
            description,
            created_at: clock.utc(),
        })
    }

    /// Returns the display identifier.
    #[must_use]
    pub const fn display_id(&self) -> &DisplayId {
        &self.display_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attaches the store-assigned key, producing the persisted task value.
    ///
    /// New tasks always start incomplete.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            display_id: self.display_id,
            title: self.title,
            description: self.description,
            created_at: self.created_at,
            completed: false,
        }
    }
}

/// Task record as persisted.
///
/// The value is immutable; the only lifecycle transition is
/// [`Task::into_completed`], which produces a new value rather than mutating
/// in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    display_id: DisplayId,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
    completed: bool,
}

/// Parameter object for reconstructing a persisted task value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted primary key.
    pub id: TaskId,
    /// Persisted display identifier.
    pub display_id: DisplayId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion flag.
    pub completed: bool,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            display_id: data.display_id,
            title: data.title,
            description: data.description,
            created_at: data.created_at,
            completed: data.completed,
        }
    }

    /// Returns the primary key.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the display identifier.
    #[must_use]
    pub const fn display_id(&self) -> &DisplayId {
        &self.display_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Produces the completed rendition of this task.
    ///
    /// All other fields are preserved. Completing an already-completed task
    /// yields an identical value; the transition never rejects.
    #[must_use]
    pub fn into_completed(self) -> Self {
        Self {
            completed: true,
            ..self
        }
    }
}
