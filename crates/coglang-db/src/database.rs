//! Database connection and table management.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::Result;
use crate::schema;

/// Main database handle. Cheap to clone; wraps the connection pool.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL at `url`.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an already-built pool (used by tests).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the three tables if they don't exist.
    ///
    /// The dataset itself is bulk-seeded outside this codebase; this only
    /// guarantees the schema is present.
    pub async fn initialize(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS languages (
                id       TEXT PRIMARY KEY,
                language TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS cognates (
                uid        BIGINT PRIMARY KEY,
                word       TEXT NOT NULL,
                translit   TEXT,
                definition TEXT,
                sentence   TEXT,
                language   TEXT NOT NULL REFERENCES languages(id),
                concept_id BIGINT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS edges (
                word1_id BIGINT NOT NULL REFERENCES cognates(uid),
                word2_id BIGINT NOT NULL REFERENCES cognates(uid)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Row counts per table.
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let languages = self.count_table(schema::TABLE_LANGUAGES).await?;
        let cognates = self.count_table(schema::TABLE_COGNATES).await?;
        let edges = self.count_table(schema::TABLE_EDGES).await?;

        Ok(DatabaseStats {
            languages,
            cognates,
            edges,
        })
    }

    async fn count_table(&self, table: &str) -> Result<i64> {
        // Table names come from the consts above, never from user input.
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Database statistics.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct DatabaseStats {
    pub languages: i64,
    pub cognates: i64,
    pub edges: i64,
}
