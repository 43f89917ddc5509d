mod events;

pub use events::EventFilter;

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Gateway over the event document store. One SQLite connection, opened at
/// startup and shared by clone; rows are append-only and the autoincrement id
/// stays internal to the store.
#[derive(Clone)]
pub struct EventStore {
    db: Arc<Mutex<Connection>>,
}

impl EventStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = Connection::open(path.as_ref())?;

        db.execute(
            "CREATE TABLE IF NOT EXISTS events (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                event_type TEXT NOT NULL,
                status TEXT,
                timestamp TEXT NOT NULL,
                doc TEXT NOT NULL
            )",
            [],
        )?;

        db.execute(
            "CREATE INDEX IF NOT EXISTS idx_events_type_timestamp
             ON events(event_type, timestamp)",
            [],
        )?;

        info!("Event store ready at {}", path.as_ref().display());

        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }
}

/// Open a throwaway store under a unique temp directory. Test-only.
#[cfg(test)]
pub fn test_event_store() -> EventStore {
    let tmpdir = std::env::temp_dir().join(format!("hooksink-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&tmpdir).expect("create temp dir");
    EventStore::open(tmpdir.join("events.db")).expect("open test store")
}
