//! Liveness probe with store row counts.

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use coglang_common::ApiError;
use coglang_db::DatabaseStats;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub stats: DatabaseStats,
}

/// GET /api/health
pub async fn api_health(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let stats = state.db.stats().await?;
    Ok(Json(HealthResponse { status: "ok", stats }))
}
