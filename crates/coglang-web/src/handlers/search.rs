//! Word search with its connected words.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use coglang_common::{lang, ApiError};
use coglang_db::CognateRepository;

use crate::handlers::ApiCognate;
use crate::state::SharedState;

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    pub query: Option<String>,
    pub language: Option<String>,
    pub language2: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub result: ApiCognate,
    pub connected_cognates: Vec<ApiCognate>,
}

/// GET /api/search - Case-insensitive word lookup plus its related words.
/// Exact match first, substring match as a fallback.
pub async fn api_search(
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Search query is required.".to_string()))?;

    let language = lang::optional_code(params.language.as_deref())?;
    let language2 = lang::optional_code(params.language2.as_deref())?;

    let repo = CognateRepository::new(state.db.clone());
    let result = repo
        .find_by_word(query, language)
        .await?
        .ok_or_else(|| ApiError::NotFound("No matching words found.".to_string()))?;

    let connected = state
        .relations
        .related(state.db.pool(), &result, language2)
        .await?;

    Ok(Json(SearchResponse {
        result: result.into(),
        connected_cognates: connected.into_iter().map(ApiCognate::from).collect(),
    }))
}
