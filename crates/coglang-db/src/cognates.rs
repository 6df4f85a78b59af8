//! Cognate repository.
//!
//! Lookups return [`CognateWithLanguage`] (joined with the language display
//! name); the annotation update works on the raw row.

use rand::Rng;

use crate::database::Database;
use crate::error::{DbError, Result};
use crate::schema::{Cognate, CognateWithLanguage};

const SELECT_WITH_LANGUAGE: &str = r#"
    SELECT c.uid, c.word, c.translit, c.definition, c.sentence,
           c.concept_id, l.language AS language_name
    FROM cognates c
    JOIN languages l ON c.language = l.id
"#;

/// Repository for cognate lookups and annotation updates.
#[derive(Clone)]
pub struct CognateRepository {
    db: Database,
}

impl CognateRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Number of cognates, optionally filtered to one language.
    pub async fn count(&self, language: Option<&str>) -> Result<i64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM cognates WHERE ($1::text IS NULL OR language = $1)",
        )
        .bind(language)
        .fetch_one(self.db.pool())
        .await?;
        Ok(total)
    }

    /// Draw one cognate uniformly at random, optionally filtered to one
    /// language. Returns `None` when nothing matches the filter.
    ///
    /// Uniformity comes from counting the filtered rows and skipping a
    /// random offset into a stable ordering.
    pub async fn random(&self, language: Option<&str>) -> Result<Option<CognateWithLanguage>> {
        let total = self.count(language).await?;
        if total == 0 {
            return Ok(None);
        }

        let offset = if total > 1 {
            rand::thread_rng().gen_range(0..total)
        } else {
            0
        };
        tracing::debug!("random draw: {total} candidates, offset {offset}");

        let sql = format!(
            "{SELECT_WITH_LANGUAGE}
             WHERE ($1::text IS NULL OR c.language = $1)
             ORDER BY c.uid
             LIMIT 1 OFFSET $2"
        );
        let row = sqlx::query_as::<_, CognateWithLanguage>(&sql)
            .bind(language)
            .bind(offset)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row)
    }

    /// Case-insensitive exact match on `word`, optionally filtered to one
    /// language. Falls back to a substring match when the exact match
    /// finds nothing.
    pub async fn find_by_word(
        &self,
        word: &str,
        language: Option<&str>,
    ) -> Result<Option<CognateWithLanguage>> {
        let sql = format!(
            "{SELECT_WITH_LANGUAGE}
             WHERE LOWER(c.word) = LOWER($1)
               AND ($2::text IS NULL OR c.language = $2)
             ORDER BY c.uid
             LIMIT 1"
        );
        let exact = sqlx::query_as::<_, CognateWithLanguage>(&sql)
            .bind(word)
            .bind(language)
            .fetch_optional(self.db.pool())
            .await?;
        if exact.is_some() {
            return Ok(exact);
        }

        let sql = format!(
            "{SELECT_WITH_LANGUAGE}
             WHERE LOWER(c.word) LIKE '%' || LOWER($1) || '%'
               AND ($2::text IS NULL OR c.language = $2)
             ORDER BY c.word, c.uid
             LIMIT 1"
        );
        let row = sqlx::query_as::<_, CognateWithLanguage>(&sql)
            .bind(word)
            .bind(language)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row)
    }

    /// Fetch a raw cognate row by id.
    pub async fn find_by_id(&self, uid: i64) -> Result<Option<Cognate>> {
        let row = sqlx::query_as::<_, Cognate>(
            "SELECT uid, word, translit, definition, sentence, language, concept_id
             FROM cognates WHERE uid = $1",
        )
        .bind(uid)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(row)
    }

    /// Overwrite the editable annotations on an existing cognate.
    ///
    /// Existence is verified first; concurrent writers race with
    /// last-write-wins semantics, which is all the store promises.
    pub async fn update_annotations(
        &self,
        uid: i64,
        definition: Option<&str>,
        sentence: Option<&str>,
    ) -> Result<Cognate> {
        if self.find_by_id(uid).await?.is_none() {
            return Err(DbError::NotFound("Cognate not found".to_string()));
        }

        let row = sqlx::query_as::<_, Cognate>(
            "UPDATE cognates SET definition = $2, sentence = $3
             WHERE uid = $1
             RETURNING uid, word, translit, definition, sentence, language, concept_id",
        )
        .bind(uid)
        .bind(definition)
        .bind(sentence)
        .fetch_one(self.db.pool())
        .await?;
        Ok(row)
    }
}
