//! Coglang Web Server
//!
//! Run with: cargo run -p coglang-web

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use coglang_db::{Database, RelationStrategy};
use coglang_web::config::Config;
use coglang_web::router::build_router;
use coglang_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("coglang_web=info,tower_http=info")),
        )
        .init();

    let config = Config::load()?;

    info!("Connecting to database: {}", config.database.url);
    let db = Database::connect(&config.database.url, config.database.max_connections).await?;
    db.initialize().await?;

    let relations: RelationStrategy = config.relations.strategy.parse()?;
    info!("Relation strategy: {relations}");

    let state = AppState::new(db, relations);
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
