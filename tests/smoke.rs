// ABOUTME: End-to-end smoke test for the full pagepulse lifecycle.
// ABOUTME: Tracks pageviews through the router, watches the live stream, and checks durability.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use futures::StreamExt;
use http::Request;
use pagepulse_server::{AppState, SharedState, create_router};
use pagepulse_store::EventStore;
use tower::ServiceExt;

fn test_state(db_path: &std::path::Path) -> SharedState {
    let store = EventStore::open(db_path).unwrap();
    Arc::new(AppState::new(store))
}

async fn first_live_frame(state: SharedState) -> String {
    let resp = create_router(state)
        .oneshot(Request::get("/live").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let mut body = resp.into_body().into_data_stream();
    let frame = tokio::time::timeout(Duration::from_secs(2), body.next())
        .await
        .expect("first frame should arrive immediately")
        .expect("stream should be open")
        .expect("frame should be ok");
    String::from_utf8(frame.to_vec()).unwrap()
}

#[tokio::test]
async fn smoke_test_full_lifecycle() {
    let dir = tempfile::TempDir::new().unwrap();
    let db_path = dir.path().join("events.db");
    let state = test_state(&db_path);

    // 1. Live stream over an empty store starts at zero.
    assert_eq!(first_live_frame(Arc::clone(&state)).await, "data: 0\n\n");

    // 2. Track a few pageviews.
    for page in ["/home", "/docs", "/home"] {
        let app = create_router(Arc::clone(&state));
        let resp = app
            .oneshot(
                Request::post(format!("/track?page={}", page))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), 204, "tracking {} should succeed", page);
    }

    // 3. Validation and method errors leave the count untouched.
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(Request::post("/track").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(
            Request::get("/track?page=/home")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 405);

    // 4. The live stream reflects the committed writes.
    assert_eq!(first_live_frame(Arc::clone(&state)).await, "data: 3\n\n");

    // 5. Rows survive a store reopen (idempotent schema init, durable data).
    drop(state);
    let reopened = test_state(&db_path);
    assert_eq!(reopened.store.count_pageviews().unwrap(), 3);
}
