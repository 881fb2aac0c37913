// ABOUTME: Shared application state for the pagepulse HTTP server.
// ABOUTME: Holds the EventStore and the process-wide shutdown signal for live streams.

use std::sync::Arc;

use pagepulse_store::EventStore;
use tokio::sync::watch;

/// Shared application state accessible by all Axum handlers.
///
/// The store is constructed once at startup and injected here; no handler
/// reaches for ambient globals. The shutdown channel lets every live-count
/// loop end promptly when the process is asked to stop, instead of lingering
/// until its next failed push.
pub struct AppState {
    pub store: EventStore,
    shutdown: watch::Sender<bool>,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Create a new AppState around an opened store, with shutdown unsignalled.
    pub fn new(store: EventStore) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self { store, shutdown }
    }

    /// Subscribe to the shutdown signal. Each live connection holds one receiver.
    pub fn subscribe_shutdown(&self) -> watch::Receiver<bool> {
        self.shutdown.subscribe()
    }

    /// Signal every subscriber that the process is shutting down.
    pub fn trigger_shutdown(&self) {
        self.shutdown.send_replace(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn shutdown_signal_reaches_subscribers() {
        let dir = TempDir::new().unwrap();
        let store = EventStore::open(&dir.path().join("events.db")).unwrap();
        let state = AppState::new(store);

        let rx = state.subscribe_shutdown();
        assert!(!*rx.borrow());

        state.trigger_shutdown();
        assert!(*rx.borrow());
    }
}
