//! Shared application state for the web server.

use std::sync::Arc;

use coglang_db::{Database, RelationStrategy};

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    /// How related words are resolved; fixed at startup.
    pub relations: RelationStrategy,
}

impl AppState {
    pub fn new(db: Database, relations: RelationStrategy) -> Self {
        Self { db, relations }
    }
}

pub type SharedState = Arc<AppState>;
