//! Language repository.

use crate::database::Database;
use crate::error::Result;
use crate::schema::Language;

/// Repository for the immutable language reference data.
#[derive(Clone)]
pub struct LanguageRepository {
    db: Database,
}

impl LanguageRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All languages, ordered alphabetically by display name.
    pub async fn list(&self) -> Result<Vec<Language>> {
        let rows = sqlx::query_as::<_, Language>(
            "SELECT id, language FROM languages ORDER BY language ASC",
        )
        .fetch_all(self.db.pool())
        .await?;
        Ok(rows)
    }
}
