//! Coglang Database Layer
//!
//! PostgreSQL access for the cognate store: three tables (`languages`,
//! `cognates`, `edges`), per-table repositories, and the related-word
//! lookup behind a pluggable [`RelationStrategy`].
//!
//! # Example
//!
//! ```rust,no_run
//! use coglang_db::{Database, CognateRepository, RelationStrategy};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost:5432/coglang", 5).await?;
//!     db.initialize().await?;
//!
//!     let cognates = CognateRepository::new(db.clone());
//!     if let Some(hit) = cognates.random(Some("spa")).await? {
//!         let related = RelationStrategy::ConceptGroup
//!             .related(db.pool(), &hit, None)
//!             .await?;
//!         println!("{} has {} cognates", hit.word, related.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod cognates;
pub mod database;
pub mod error;
pub mod languages;
pub mod relations;
pub mod schema;

pub use cognates::CognateRepository;
pub use database::{Database, DatabaseStats};
pub use error::{DbError, Result};
pub use languages::LanguageRepository;
pub use relations::RelationStrategy;
pub use schema::{
    Cognate, CognateWithLanguage, Edge, Language, TABLE_COGNATES, TABLE_EDGES, TABLE_LANGUAGES,
};
