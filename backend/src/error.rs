use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures a handler can report. Both variants answer with an empty body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("todo {0} not found")]
    NotFound(i64),
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::NotFound(id) => tracing::debug!(id, "todo not found"),
            ApiError::Store(e) => tracing::error!(error = %e, "store request failed"),
        }
        self.status().into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
