//! Annotation editing.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use coglang_common::ApiError;
use coglang_db::CognateRepository;

use crate::state::SharedState;

#[derive(Debug, Deserialize, Default)]
pub struct UpdateCognate {
    pub definition: Option<String>,
    pub sentence: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdatedCognate {
    pub id: String,
    pub definition: Option<String>,
    pub sentence: Option<String>,
}

/// PATCH /api/cognates/{uid} - Overwrite the editable annotations.
/// Both fields are written; an omitted field clears the stored value.
pub async fn update_cognate(
    State(state): State<SharedState>,
    Path(uid): Path<i64>,
    Json(body): Json<UpdateCognate>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = CognateRepository::new(state.db.clone());
    let updated = repo
        .update_annotations(uid, body.definition.as_deref(), body.sentence.as_deref())
        .await?;

    Ok(Json(UpdatedCognate {
        id: updated.uid.to_string(),
        definition: updated.definition,
        sentence: updated.sentence,
    }))
}
