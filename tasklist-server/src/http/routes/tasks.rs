//! Task endpoints
//!
//! Each handler parses and validates its input before touching the service,
//! so malformed ids, bodies and dates never reach storage.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, TaskIdParam};
use crate::http::server::AppState;
use crate::models::{NewTask, Task, ValidationError};

/// Create/update task request
///
/// Absent and `null` fields read as empty strings. An empty `due_date` then
/// fails date parsing.
#[derive(Deserialize, Default)]
pub struct TaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl TryFrom<TaskRequest> for NewTask {
    type Error = ValidationError;

    fn try_from(req: TaskRequest) -> Result<Self, Self::Error> {
        NewTask::parse(
            req.title.unwrap_or_default(),
            req.description.unwrap_or_default(),
            &req.due_date.unwrap_or_default(),
        )
    }
}

/// GET /tasks - list all tasks
async fn list_tasks(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.tasks.list_tasks().await?;
    Ok(Json(tasks))
}

/// POST /tasks - create a task
async fn create_task(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<TaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = NewTask::try_from(req)?;
    let created = state.tasks.create_task(task).await?;

    tracing::debug!(id = created.id, "task created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /tasks/{id} - get a single task
async fn get_task(
    State(state): State<Arc<AppState>>,
    TaskIdParam(id): TaskIdParam,
) -> Result<Json<Task>, ApiError> {
    let task = state.tasks.get_task(id).await?;
    Ok(Json(task))
}

/// PUT /tasks/{id} - replace title, description and due date
async fn update_task(
    State(state): State<Arc<AppState>>,
    TaskIdParam(id): TaskIdParam,
    JsonBody(req): JsonBody<TaskRequest>,
) -> Result<Json<Task>, ApiError> {
    let task = NewTask::try_from(req)?;
    let updated = state.tasks.update_task(id, task).await?;
    Ok(Json(updated))
}

/// DELETE /tasks/{id} - delete a task
async fn delete_task(
    State(state): State<Arc<AppState>>,
    TaskIdParam(id): TaskIdParam,
) -> Result<StatusCode, ApiError> {
    state.tasks.delete_task(id).await?;

    tracing::debug!(id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Task routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
}
