//! API error taxonomy shared by every handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing request parameter (400).
    #[error("{0}")]
    BadRequest(String),

    /// No matching row (404).
    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, json!({ "error": msg }))
            }
            ApiError::Database(e) => {
                tracing::error!("database failure: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error", "details": e.to_string() }),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("unhandled failure: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
