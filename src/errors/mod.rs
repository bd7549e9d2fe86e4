use std::io;
use axum::{http::StatusCode, response::{IntoResponse, Response}};
use thiserror::Error;

/// Error types for the blog server
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record #{index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error("slug '{0}' is used by more than one record")]
    DuplicateSlug(String),
    #[error("id {0} is used by more than one record")]
    DuplicateId(u64),
    #[error("not found")]
    NotFound,
    #[error("invalid path")]
    InvalidPath,
    #[error("render error: {0}")]
    Render(String),
}

impl IntoResponse for FolioError {
    fn into_response(self) -> Response {
        match self {
            FolioError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            FolioError::InvalidPath => (StatusCode::BAD_REQUEST, "Invalid path").into_response(),
            other => {
                log::error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response()
            }
        }
    }
}
