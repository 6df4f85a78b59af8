//! Language listing.

use axum::{extract::State, response::IntoResponse, Json};

use coglang_common::ApiError;
use coglang_db::LanguageRepository;

use crate::state::SharedState;

/// GET /api/languages - All languages as `{id, language}`, ordered by name
pub async fn api_languages(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let languages = LanguageRepository::new(state.db.clone()).list().await?;
    Ok(Json(languages))
}
