//! Shared helpers for the API integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use backend::config::DatabaseConfig;
use backend::{app, store};
use tower::ServiceExt;

/// Router over a fresh, migrated in-memory database.
pub async fn test_app() -> Router {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    };
    let pool = store::connect(&config).await.expect("Failed to open test DB");
    store::migrate(&pool).await.expect("Failed to migrate test DB");
    app(pool)
}

/// Send one request through `app` and return the status and raw body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    json: Option<serde_json::Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match json {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

/// `GET /api/todos`, decoded.
pub async fn list(app: &Router) -> Vec<shared::TodoItem> {
    let (status, body) = send(app, Method::GET, "/api/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}
