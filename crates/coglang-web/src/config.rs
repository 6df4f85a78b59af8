//! Configuration loading for Coglang.
//! Reads coglang.toml from the current directory or the path in the
//! COGLANG_CONFIG env var; DATABASE_URL and PORT env vars win over the file.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub relations: RelationsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_url() -> String { "postgres://localhost:5432/coglang".to_string() }
fn default_max_connections() -> u32 { 5 }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationsConfig {
    /// "concept-group" or "edge-graph".
    #[serde(default = "default_strategy")]
    pub strategy: String,
}

fn default_strategy() -> String { "concept-group".to_string() }

impl Default for RelationsConfig {
    fn default() -> Self {
        Self { strategy: default_strategy() }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("COGLANG_CONFIG")
            .unwrap_or_else(|_| "coglang.toml".to_string());

        let mut config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database.url = url;
        }
        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port.parse()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coglang_db::RelationStrategy;

    #[test]
    fn test_defaults_are_usable() {
        let config = Config::default();
        assert!(config.server.port > 0);
        assert!(config.database.max_connections > 0);
        assert!(config.database.url.starts_with("postgres://"));
    }

    #[test]
    fn test_default_strategy_parses() {
        let config = Config::default();
        let strategy: RelationStrategy = config.relations.strategy.parse().unwrap();
        assert_eq!(strategy, RelationStrategy::ConceptGroup);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, default_host());
        assert_eq!(config.relations.strategy, "concept-group");
    }
}
