//! Row types for the cognate store.
//!
//! `uid` values are BIGINTs in PostgreSQL; handlers stringify them before
//! they reach JSON so clients never see precision loss.

pub const TABLE_LANGUAGES: &str = "languages";
pub const TABLE_COGNATES: &str = "cognates";
pub const TABLE_EDGES: &str = "edges";

/// A language, keyed by its 3-letter lowercase code.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct Language {
    pub id: String,
    pub language: String,
}

/// A cognate row as stored, language referenced by code.
///
/// `word`, `translit`, `language` and `concept_id` are immutable from the
/// application's perspective; only `definition` and `sentence` are editable.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct Cognate {
    pub uid: i64,
    pub word: String,
    pub translit: Option<String>,
    pub definition: Option<String>,
    pub sentence: Option<String>,
    pub language: String,
    pub concept_id: i64,
}

/// A cognate joined with its language's display name.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct CognateWithLanguage {
    pub uid: i64,
    pub word: String,
    pub translit: Option<String>,
    pub definition: Option<String>,
    pub sentence: Option<String>,
    pub concept_id: i64,
    pub language_name: String,
}

/// An explicit pairwise cognate relation. Symmetric.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct Edge {
    pub word1_id: i64,
    pub word2_id: i64,
}
