//! HTTP API service for the task store.
//!
//! # Overview
//! Maps four HTTP operations onto the four store operations: `GET /tasks`,
//! `POST /tasks`, `PUT /tasks/{id}`, `DELETE /tasks/{id}`. Handlers hold no
//! logic beyond extraction and status selection; validation and id
//! assignment live in [`store::TaskStore`].
//!
//! # Design
//! - The store is shared as `Arc<Mutex<TaskStore>>` — the SQLite connection
//!   is not `Sync`, and the mutex also makes the update read-modify-write
//!   atomic with respect to other requests.
//! - Every [`StoreError`] is rendered at this boundary as a JSON body of
//!   shape `{"error": message}` with the matching status code; nothing
//!   propagates past the router.
//! - The `{id}` path segment is parsed strictly: a non-numeric id is a 400,
//!   never a silent fallback value.

pub mod store;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;
use tokio::{net::TcpListener, sync::Mutex};

pub use store::{CreateTask, StoreError, Task, TaskStore, UpdateTask};

/// Shared handle to the task store.
pub type Db = Arc<Mutex<TaskStore>>;

/// JSON body returned with every error status.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match &self {
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Storage(err) => {
                tracing::error!("storage failure: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Builds the router serving the task API on top of the given store.
pub fn app(store: TaskStore) -> Router {
    let db: Db = Arc::new(Mutex::new(store));
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", put(update_task).delete(delete_task))
        .with_state(db)
}

/// Serves the task API on the given listener until the task is dropped.
pub async fn run(listener: TcpListener, store: TaskStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

async fn list_tasks(State(db): State<Db>) -> Result<Json<Vec<Task>>, StoreError> {
    let store = db.lock().await;
    Ok(Json(store.list()?))
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<CreateTask>,
) -> Result<(StatusCode, Json<Task>), StoreError> {
    let store = db.lock().await;
    let task = store.create(input)?;
    Ok((StatusCode::CREATED, Json(task)))
}

async fn update_task(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateTask>,
) -> Result<Json<Task>, StoreError> {
    let id = parse_id(&id)?;
    let store = db.lock().await;
    Ok(Json(store.update(id, patch)?))
}

async fn delete_task(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StoreError> {
    let id = parse_id(&id)?;
    let store = db.lock().await;
    store.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Parses an id path segment, rejecting anything that is not an integer.
fn parse_id(raw: &str) -> Result<i64, StoreError> {
    raw.parse()
        .map_err(|_| StoreError::Validation(format!("invalid task id: {raw}")))
}
