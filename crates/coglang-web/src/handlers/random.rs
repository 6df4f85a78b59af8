//! Random cognate draw with its connected words.

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
pub struct RandomParams {
    pub language: Option<String>,
    pub language2: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomResponse {
    pub random_cognate: ApiCognate,
    pub connected_cognates: Vec<ApiCognate>,
}

/// GET /api/random - One uniformly random cognate plus its related words
pub async fn api_random(
    State(state): State<SharedState>,
    Query(params): Query<RandomParams>,
) -> Result<impl IntoResponse, ApiError> {
    let language = lang::optional_code(params.language.as_deref())?;
    // `language2` narrows the connected list only, never the primary draw.
    let language2 = lang::optional_code(params.language2.as_deref())?;

    let repo = CognateRepository::new(state.db.clone());
    let anchor = repo
        .random(language)
        .await?
        .ok_or_else(|| ApiError::NotFound("No cognates found".to_string()))?;

    let connected = state
        .relations
        .related(state.db.pool(), &anchor, language2)
        .await?;

    Ok(Json(RandomResponse {
        random_cognate: anchor.into(),
        connected_cognates: connected.into_iter().map(ApiCognate::from).collect(),
    }))
}
