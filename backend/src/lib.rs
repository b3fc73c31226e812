//! Todo API: CRUD over a single `todos` table, served with axum.

pub mod config;
pub mod error;
pub mod handlers;
pub mod store;

use axum::{
    http::{HeaderName, Request},
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use crate::handlers::{create_todo, delete_todo, list_todos, update_completion};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assigns a UUID v4 to requests that arrive without an `x-request-id`.
#[derive(Clone, Copy, Default)]
struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        id.parse().ok().map(RequestId::new)
    }
}

/// Build the application router over `pool`.
pub fn app(pool: SqlitePool) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/:id", post(update_completion).delete(delete_todo))
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .with_state(pool)
}
