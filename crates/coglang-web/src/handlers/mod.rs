//! HTTP handlers for all web routes.

pub mod browse;
pub mod cognates;
pub mod health;
pub mod languages;
pub mod random;
pub mod search;

use coglang_db::CognateWithLanguage;
use serde::Serialize;

/// Cognate shape returned by the lookup endpoints.
/// `id` is stringified so JSON consumers never lose BIGINT precision.
#[derive(Debug, Serialize)]
pub struct ApiCognate {
    pub id: String,
    pub word: String,
    pub translit: Option<String>,
    pub definition: Option<String>,
    pub sentence: Option<String>,
    pub language_name: String,
}

impl From<CognateWithLanguage> for ApiCognate {
    fn from(row: CognateWithLanguage) -> Self {
        Self {
            id: row.uid.to_string(),
            word: row.word,
            translit: row.translit,
            definition: row.definition,
            sentence: row.sentence,
            language_name: row.language_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_stringified() {
        let row = CognateWithLanguage {
            uid: 9_007_199_254_740_993, // above 2^53, breaks f64 JSON consumers
            word: "casa".to_string(),
            translit: None,
            definition: None,
            sentence: None,
            concept_id: 1,
            language_name: "Spanish".to_string(),
        };
        let api = ApiCognate::from(row);
        assert_eq!(api.id, "9007199254740993");

        let json = serde_json::to_value(&api).unwrap();
        assert!(json["id"].is_string());
    }
}
