//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    browse::browse_page,
    cognates::update_cognate,
    health::api_health,
    languages::api_languages,
    random::api_random,
    search::api_search,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(browse_page))

        // API endpoints
        .route("/api/health",         get(api_health))
        .route("/api/languages",      get(api_languages))
        .route("/api/random",         get(api_random))
        .route("/api/search",         get(api_search))
        .route("/api/cognates/{uid}", patch(update_cognate))

        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
        .with_state(shared)
}
