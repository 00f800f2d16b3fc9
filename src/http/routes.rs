//! Router, handlers, and server bootstrap for the task REST surface.

use std::sync::Arc;

use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use mockable::Clock;
use tower_http::cors::CorsLayer;

use super::dto::{AddTaskRequest, CompleteResponse, ListResponse, TaskDto};
use super::error::ApiError;
use crate::task::domain::TaskId;
use crate::task::ports::TaskStore;
use crate::task::services::TaskLifecycleService;

/// Shared lifecycle service handed to every handler as axum state.
pub type SharedService<S, C> = Arc<TaskLifecycleService<S, C>>;

/// Builds the REST router over the given lifecycle service.
///
/// CORS is fully permissive; the service carries no authentication and the
/// original frontend is served from a different origin.
pub fn router<S, C>(service: SharedService<S, C>) -> Router
where
    S: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/api/tasks", post(create_task::<S, C>))
        .route("/api/tasks/recent", get(find_recent_tasks::<S, C>))
        .route("/api/tasks/{id}/complete", put(complete_task::<S, C>))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Starts the REST server on the given address.
///
/// Returns the bound address and a join handle; binding to port `0` lets
/// test code obtain an OS-assigned port.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server<S, C>(
    addr: &str,
    service: SharedService<S, C>,
) -> Result<
    (std::net::SocketAddr, tokio::task::JoinHandle<()>),
    Box<dyn std::error::Error + Send + Sync>,
>
where
    S: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "task api server error");
        }
    });

    Ok((bound_addr, handle))
}

async fn create_task<S, C>(
    State(service): State<SharedService<S, C>>,
    payload: Result<Json<AddTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskDto>), ApiError>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let Json(body) = payload?;
    let task = service
        .create(
            body.title.unwrap_or_default(),
            body.description.unwrap_or_default(),
        )
        .await?;
    tracing::debug!(id = %task.id(), task_id = %task.display_id(), "task created");
    Ok((StatusCode::CREATED, Json(TaskDto::from(task))))
}

async fn find_recent_tasks<S, C>(
    State(service): State<SharedService<S, C>>,
) -> Result<Json<ListResponse>, ApiError>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let recent = service.find_recent().await?;
    Ok(Json(ListResponse::from(recent)))
}

async fn complete_task<S, C>(
    State(service): State<SharedService<S, C>>,
    Path(id): Path<i64>,
) -> Result<Json<CompleteResponse>, ApiError>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let completed = service.complete(TaskId::new(id)).await?;
    tracing::debug!(id, "task completed");
    Ok(Json(CompleteResponse::from(completed)))
}
