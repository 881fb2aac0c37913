// ABOUTME: Pageview ingest handler for POST /track.
// ABOUTME: Validates the page query parameter and delegates one insert to the EventStore.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::app_state::SharedState;

/// Query parameters for the track endpoint.
#[derive(Debug, Deserialize)]
pub struct TrackParams {
    pub page: Option<String>,
}

/// POST /track?page=... - Record a single pageview.
///
/// Missing or empty page yields 400 and never reaches the store. A store
/// failure surfaces as 500 with the error description; there are no retries.
pub async fn track(
    State(state): State<SharedState>,
    Query(params): Query<TrackParams>,
) -> impl IntoResponse {
    let page = match params.page.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => {
            return (StatusCode::BAD_REQUEST, "missing page parameter").into_response();
        }
    };

    match state.store.record_pageview(page) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("failed to record pageview: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
