//! Request handlers for the todo collection and individual items.
//!
//! Every handler checks out its own pooled connection; dropping the guard
//! hands it back to the pool on every exit path.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use shared::{CompletionUpdate, TodoItem};
use sqlx::SqlitePool;

use crate::error::{ApiError, ApiResult};
use crate::store;

pub async fn list_todos(State(pool): State<SqlitePool>) -> ApiResult<Json<Vec<TodoItem>>> {
    let mut conn = pool.acquire().await?;
    let todos = store::list(&mut conn).await?;
    Ok(Json(todos))
}

pub async fn create_todo(
    State(pool): State<SqlitePool>,
    Json(payload): Json<TodoItem>,
) -> ApiResult<StatusCode> {
    let mut conn = pool.acquire().await?;
    let id = store::insert(&mut conn, &payload).await?;
    tracing::debug!(id, "todo created");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_completion(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<CompletionUpdate>,
) -> ApiResult<StatusCode> {
    let mut conn = pool.acquire().await?;
    if !store::set_completion(&mut conn, id, payload.is_complete).await? {
        return Err(ApiError::NotFound(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_todo(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> ApiResult<StatusCode> {
    let mut conn = pool.acquire().await?;
    if !store::delete(&mut conn, id).await? {
        return Err(ApiError::NotFound(id));
    }
    tracing::debug!(id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}
