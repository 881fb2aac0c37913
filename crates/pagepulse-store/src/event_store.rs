// ABOUTME: SQLite event store holding the pageviews table in WAL mode.
// ABOUTME: Every operation runs in its own explicit transaction on its own connection.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, TransactionBehavior, params};
use thiserror::Error;

/// Errors that can occur during event store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// The sole owner of persisted pageview state.
///
/// Holds only the database path; each operation opens its own connection and
/// wraps its work in one explicit transaction, so the store is safe to share
/// across tasks without any application-level lock. Concurrency correctness
/// comes from SQLite itself: WAL mode lets readers observe a consistent
/// snapshot while a writer commits, and write transactions serialize against
/// each other.
#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    /// Open (or create) the store at the given path and ensure the schema
    /// exists. Safe to run against an already-initialized file.
    ///
    /// A failure here means no further correct operation is possible, so
    /// callers treat it as fatal at startup.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let store = Self {
            path: path.to_path_buf(),
        };

        let conn = store.connect()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS pageviews (
                id INTEGER PRIMARY KEY,
                page TEXT NOT NULL,
                timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
            );",
        )?;

        tracing::info!("event store ready at {}", store.path.display());
        Ok(store)
    }

    /// Open a connection with the pragmas every operation relies on.
    /// WAL is sticky in the database file but cheap to re-assert; the busy
    /// timeout makes contended writers wait instead of failing instantly.
    fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA busy_timeout=5000;")?;
        Ok(conn)
    }

    /// Insert one pageview row inside a write transaction.
    ///
    /// The transaction takes the write lock immediately at start, so write
    /// contention surfaces up front rather than mid-transaction. On any
    /// failure the transaction is rolled back on drop; no partial row is
    /// ever visible. Callers are responsible for passing a non-empty page.
    pub fn record_pageview(&self, page: &str) -> Result<(), StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute("INSERT INTO pageviews (page) VALUES (?1)", params![page])?;
        tx.commit()?;
        Ok(())
    }

    /// Return the total number of stored pageviews.
    ///
    /// The count runs inside an explicit (deferred, read-only in effect)
    /// transaction so each call observes a single consistent snapshot even
    /// while concurrent writers commit; the commit releases the snapshot.
    pub fn count_pageviews(&self) -> Result<i64, StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let count = tx.query_row("SELECT COUNT(*) FROM pageviews", [], |row| row.get(0))?;
        tx.commit()?;
        Ok(count)
    }
}
