// ABOUTME: SSE live-count handler streaming the total pageview count to one client.
// ABOUTME: Polls the EventStore on a fixed interval until disconnect, error, or shutdown.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::response::sse::{Event as SseEvent, Sse};
use futures::stream::Stream;
use pagepulse_store::EventStore;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};

use crate::app_state::SharedState;

/// How often each connection samples the store. A client never sees data
/// older than one interval relative to the most recent tick.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// GET /live - Stream the running pageview count as SSE frames.
///
/// Each connection gets its own polling loop over the shared store. The loop
/// ends when the client disconnects (the stream is dropped), when a count
/// query fails, or when process shutdown is signalled.
pub async fn live(State(state): State<SharedState>) -> impl IntoResponse {
    let stream = count_stream(state.store.clone(), state.subscribe_shutdown());

    (
        [
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
        ],
        Sse::new(stream),
    )
        .into_response()
}

/// Build the per-connection polling stream. The first frame is emitted
/// immediately; later frames follow one poll interval apart.
fn count_stream(
    store: EventStore,
    shutdown: watch::Receiver<bool>,
) -> impl Stream<Item = Result<SseEvent, Infallible>> {
    let mut interval = time::interval(POLL_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    futures::stream::unfold(
        (store, shutdown, interval),
        |(store, mut shutdown, mut interval)| async move {
            // Shutdown may have been signalled before this connection
            // subscribed, or while the previous frame was in flight.
            if *shutdown.borrow_and_update() {
                return None;
            }

            tokio::select! {
                _ = interval.tick() => {}
                changed = shutdown.changed() => {
                    if changed.is_ok() {
                        return None;
                    }
                    // Err means the sender is gone, not that shutdown was
                    // requested; keep polling on the plain tick cadence.
                    interval.tick().await;
                }
            }

            match store.count_pageviews() {
                Ok(count) => {
                    let event = SseEvent::default().data(count.to_string());
                    Some((Ok(event), (store, shutdown, interval)))
                }
                Err(e) => {
                    tracing::error!("live count query failed, closing stream: {}", e);
                    None
                }
            }
        },
    )
}
