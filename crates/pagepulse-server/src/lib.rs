// ABOUTME: HTTP server for pagepulse, providing pageview ingest and SSE live counts.
// ABOUTME: Uses Axum with a shared EventStore injected into every handler.

pub mod api;
pub mod app_state;
pub mod config;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use config::{ConfigError, ServerConfig};
pub use routes::create_router;
