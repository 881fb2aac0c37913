// ABOUTME: Configuration loading for the pagepulse server.
// ABOUTME: Reads environment variables (with .env support) and validates the bind address.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PAGEPULSE_BIND is not a valid socket address: {0}")]
    InvalidBind(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub db_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - PAGEPULSE_BIND: socket address to bind (default: 127.0.0.1:8080)
    /// - PAGEPULSE_DB: SQLite database file path (default: events.db)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let bind_str =
            std::env::var("PAGEPULSE_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        let db_path = std::env::var("PAGEPULSE_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("events.db"));

        Ok(Self { bind, db_path })
    }
}
