use anyhow::Result;
use rusqlite::params;
use serde_json::Value;

use super::EventStore;
use crate::core::events::StoredEvent;

/// Equality filter for stored-event queries. An empty filter matches every
/// record; `status` is only consulted together with an event type.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub event_type: Option<String>,
    pub status: Option<String>,
}

impl EventStore {
    /// Append one record. Returns the persisted document, which never carries
    /// the store's internal row id.
    pub async fn insert_event(&self, record: &StoredEvent) -> Result<Value> {
        let doc = serde_json::to_value(record)?;
        let db = self.db.lock().await;
        db.execute(
            "INSERT INTO events (event_type, status, timestamp, doc) VALUES (?1, ?2, ?3, ?4)",
            params![
                record.event_type(),
                record.status(),
                record.timestamp(),
                doc.to_string()
            ],
        )?;
        Ok(doc)
    }

    /// Fetch documents matching the filter, newest first, capped at `limit`.
    pub async fn query_events(&self, filter: &EventFilter, limit: usize) -> Result<Vec<Value>> {
        let db = self.db.lock().await;
        let mut results = Vec::new();

        match (&filter.event_type, &filter.status) {
            (Some(event_type), Some(status)) => {
                let mut stmt = db.prepare(
                    "SELECT doc FROM events WHERE event_type = ?1 AND status = ?2 \
                     ORDER BY timestamp DESC, id DESC LIMIT ?3",
                )?;
                let rows = stmt.query_map(params![event_type, status, limit as i64], |row| {
                    row.get::<_, String>(0)
                })?;
                for row in rows {
                    results.push(serde_json::from_str(&row?)?);
                }
            }
            (Some(event_type), None) => {
                let mut stmt = db.prepare(
                    "SELECT doc FROM events WHERE event_type = ?1 \
                     ORDER BY timestamp DESC, id DESC LIMIT ?2",
                )?;
                let rows = stmt.query_map(params![event_type, limit as i64], |row| {
                    row.get::<_, String>(0)
                })?;
                for row in rows {
                    results.push(serde_json::from_str(&row?)?);
                }
            }
            (None, _) => {
                let mut stmt = db.prepare(
                    "SELECT doc FROM events ORDER BY timestamp DESC, id DESC LIMIT ?1",
                )?;
                let rows =
                    stmt.query_map(params![limit as i64], |row| row.get::<_, String>(0))?;
                for row in rows {
                    results.push(serde_json::from_str(&row?)?);
                }
            }
        }

        Ok(results)
    }
}
