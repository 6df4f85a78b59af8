//! Router-level tests for request validation and method routing.
//!
//! These use a lazily-connected pool: every request below is rejected at
//! the boundary, so no PostgreSQL has to be running.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use coglang_db::{Database, RelationStrategy};
use coglang_web::router::build_router;
use coglang_web::state::AppState;

fn test_router() -> axum::Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost:5432/coglang")
        .expect("lazy pool");
    build_router(AppState::new(
        Database::from_pool(pool),
        RelationStrategy::ConceptGroup,
    ))
}

async fn get_status(uri: &str) -> StatusCode {
    let response = test_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    response.status()
}

#[tokio::test]
async fn test_malformed_language_is_rejected() {
    for bad in ["SPA", "es", "span", "e1s", "e%20s"] {
        assert_eq!(
            get_status(&format!("/api/random?language={bad}")).await,
            StatusCode::BAD_REQUEST,
            "language={bad}"
        );
    }
}

#[tokio::test]
async fn test_malformed_language2_is_rejected() {
    assert_eq!(
        get_status("/api/search?query=casa&language2=XXL").await,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        get_status("/api/random?language2=q").await,
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_missing_search_query_is_rejected() {
    assert_eq!(get_status("/api/search").await, StatusCode::BAD_REQUEST);
    assert_eq!(
        get_status("/api/search?query=").await,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        get_status("/api/search?query=%20%20").await,
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_wrong_method_on_cognates_is_rejected() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/cognates/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    assert_eq!(get_status("/api/nope").await, StatusCode::NOT_FOUND);
}
