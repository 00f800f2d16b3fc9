//! Central mapping of lifecycle failures to HTTP responses.

use super::dto::ErrorBody;
use crate::task::ports::TaskStoreError;
use crate::task::services::TaskLifecycleError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;

/// Transport-level error carrying its HTTP status and response message.
///
/// All lifecycle failures funnel through [`From<TaskLifecycleError>`] so the
/// status-code mapping lives in exactly one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Returns the HTTP status this error renders as.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::Domain(domain_err) => Self {
                status: StatusCode::BAD_REQUEST,
                message: domain_err.to_string(),
            },
            TaskLifecycleError::NotFound(id)
            | TaskLifecycleError::Store(TaskStoreError::NotFound(id)) => Self {
                status: StatusCode::NOT_FOUND,
                message: format!("Task {id} not found"),
            },
            TaskLifecycleError::Store(store_err) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Unexpected error: {store_err}"),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: self.status.as_u16(),
            message: self.message,
            time_stamp: Utc::now().timestamp_millis(),
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::domain::{TaskDomainError, TaskId};

    #[test]
    fn persistence_failure_maps_to_internal_error() {
        let err = TaskLifecycleError::Store(TaskStoreError::persistence(std::io::Error::other(
            "db down",
        )));

        let api = ApiError::from(err);

        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(api.message().starts_with("Unexpected error: "));
        assert!(api.message().contains("db down"));
    }

    #[test]
    fn store_level_not_found_maps_to_not_found() {
        let err = TaskLifecycleError::Store(TaskStoreError::NotFound(TaskId::new(7)));

        let api = ApiError::from(err);

        assert_eq!(api.status(), StatusCode::NOT_FOUND);
        assert_eq!(api.message(), "Task 7 not found");
    }

    #[test]
    fn domain_validation_maps_to_bad_request() {
        let err = TaskLifecycleError::Domain(TaskDomainError::EmptyTitle);

        let api = ApiError::from(err);

        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api.message(), "Title cannot be empty");
    }
}
