use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use puzzle_core::PuzzleError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Puzzle(e @ PuzzleError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            AppError::Puzzle(e) => {
                // The catalog is a build-time artifact, so anything else
                // coming out of the core is a server fault.
                tracing::error!("Puzzle error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Puzzle error".to_string())
            }
            AppError::Anyhow(e) => {
                tracing::error!("Unexpected error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        // Error body format: {"detail": "message"}
        (status, Json(json!({ "detail": message }))).into_response()
    }
}
