// ABOUTME: Durable SQLite-backed storage for pageview events.
// ABOUTME: Exposes EventStore with transactional insert and count-read operations.

pub mod event_store;

pub use event_store::{EventStore, StoreError};
