//! Database error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Postgres error: {0}")]
    Postgres(#[from] sqlx::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("Unknown relation strategy: {0}")]
    UnknownStrategy(String),
}

impl From<DbError> for coglang_common::ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Postgres(e) => coglang_common::ApiError::Database(e),
            DbError::NotFound(msg) => coglang_common::ApiError::NotFound(msg),
            DbError::UnknownStrategy(s) => {
                coglang_common::ApiError::Internal(anyhow::anyhow!("unknown relation strategy: {s}"))
            }
        }
    }
}
