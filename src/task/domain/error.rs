//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
///
/// Display renditions double as the user-facing validation messages, so the
/// transport layer can surface them verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("Title cannot be empty")]
    EmptyTitle,

    /// The description is empty after trimming.
    #[error("Description cannot be empty")]
    EmptyDescription,
}
