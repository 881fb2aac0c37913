// ABOUTME: Route definitions for the pagepulse HTTP surface.
// ABOUTME: Assembles the help, track, and live routes into one Axum Router with shared state.

use axum::Router;
use axum::routing::{get, post};

use crate::api;
use crate::app_state::SharedState;

/// Build the complete Axum router with all routes and shared state.
///
/// Method routing gives non-POST requests to /track a 405 without any
/// handler involvement.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/track", post(api::track::track))
        .route("/live", get(api::live::live))
        .with_state(state)
}

/// Plaintext help listing the available endpoints.
async fn index() -> &'static str {
    "pagepulse running\nPOST /track?page=...\nGET /live\n"
}
