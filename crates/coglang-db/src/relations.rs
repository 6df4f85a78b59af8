//! Related-word lookup.
//!
//! The dataset carries the cognate relationship two ways: an explicit
//! `edges` pair table and a shared `concept_id` on each cognate row. Both
//! are kept behind one interface; the strategy is chosen in configuration,
//! never per request.

use std::fmt;
use std::str::FromStr;

use sqlx::PgPool;

use crate::error::{DbError, Result};
use crate::schema::CognateWithLanguage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelationStrategy {
    /// All cognates sharing the anchor's concept group, anchor excluded.
    #[default]
    ConceptGroup,
    /// One-hop traversal over the `edges` pair table.
    EdgeGraph,
}

impl RelationStrategy {
    /// Related cognates of `anchor`, optionally filtered to one language.
    /// Ordered by word, then language name.
    pub async fn related(
        &self,
        pool: &PgPool,
        anchor: &CognateWithLanguage,
        language: Option<&str>,
    ) -> Result<Vec<CognateWithLanguage>> {
        let rows = match self {
            RelationStrategy::ConceptGroup => {
                sqlx::query_as::<_, CognateWithLanguage>(
                    r#"
                    SELECT c.uid, c.word, c.translit, c.definition, c.sentence,
                           c.concept_id, l.language AS language_name
                    FROM cognates c
                    JOIN languages l ON c.language = l.id
                    WHERE c.concept_id = $1
                      AND c.uid <> $2
                      AND ($3::text IS NULL OR c.language = $3)
                    ORDER BY c.word, l.language
                    "#,
                )
                .bind(anchor.concept_id)
                .bind(anchor.uid)
                .bind(language)
                .fetch_all(pool)
                .await?
            }
            RelationStrategy::EdgeGraph => {
                // The pair table is symmetric: the anchor may sit on either
                // side, so join on whichever end is not the anchor.
                sqlx::query_as::<_, CognateWithLanguage>(
                    r#"
                    SELECT c.uid, c.word, c.translit, c.definition, c.sentence,
                           c.concept_id, l.language AS language_name
                    FROM edges e
                    JOIN cognates c ON c.uid =
                        CASE WHEN e.word1_id = $1 THEN e.word2_id ELSE e.word1_id END
                    JOIN languages l ON c.language = l.id
                    WHERE (e.word1_id = $1 OR e.word2_id = $1)
                      AND ($2::text IS NULL OR c.language = $2)
                    ORDER BY c.word, l.language
                    "#,
                )
                .bind(anchor.uid)
                .bind(language)
                .fetch_all(pool)
                .await?
            }
        };
        Ok(rows)
    }
}

impl FromStr for RelationStrategy {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "concept-group" => Ok(RelationStrategy::ConceptGroup),
            "edge-graph" => Ok(RelationStrategy::EdgeGraph),
            other => Err(DbError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for RelationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationStrategy::ConceptGroup => write!(f, "concept-group"),
            RelationStrategy::EdgeGraph => write!(f, "edge-graph"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_round_trips_through_str() {
        for s in [RelationStrategy::ConceptGroup, RelationStrategy::EdgeGraph] {
            assert_eq!(s.to_string().parse::<RelationStrategy>().unwrap(), s);
        }
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!("adjacency-list".parse::<RelationStrategy>().is_err());
        assert!("".parse::<RelationStrategy>().is_err());
    }

    #[test]
    fn test_default_is_concept_group() {
        assert_eq!(RelationStrategy::default(), RelationStrategy::ConceptGroup);
    }
}
