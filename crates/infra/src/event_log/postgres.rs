//! Postgres-backed event log.
//!
//! One row per event: `event_id` (UUID, primary key), `payload` (JSONB,
//! stored verbatim), `recorded_at` (TIMESTAMPTZ, the server timestamp).
//! Append-only at the application level; nothing ever updates or deletes a
//! row.
//!
//! The pool is an explicitly owned resource handed in at construction —
//! there is no process-global handle. `PgPool` is internally reference
//! counted and thread-safe; its own connection management is the only
//! pooling in play.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use storefront_core::EventId;
use storefront_events::EventRecord;

use super::r#trait::{EventLog, EventLogError};

/// Postgres-backed append-only event log.
#[derive(Debug, Clone)]
pub struct PostgresEventLog {
    pool: Arc<PgPool>,
}

impl PostgresEventLog {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Create the `events` table if it doesn't exist yet.
    pub async fn ensure_schema(&self) -> Result<(), EventLogError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS events (
                event_id    UUID PRIMARY KEY,
                payload     JSONB NOT NULL,
                recorded_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("ensure_schema", e))?;
        Ok(())
    }
}

#[async_trait]
impl EventLog for PostgresEventLog {
    #[instrument(skip(self, record), fields(event_id = %record.event_id))]
    async fn append(&self, record: EventRecord) -> Result<(), EventLogError> {
        sqlx::query(
            r#"
            INSERT INTO events (event_id, payload, recorded_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(*record.event_id.as_uuid())
        .bind(&record.payload)
        .bind(record.server_timestamp)
        .execute(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("append", e))?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn events(&self) -> Result<Vec<EventRecord>, EventLogError> {
        let rows = sqlx::query(
            r#"
            SELECT event_id, payload, recorded_at
            FROM events
            ORDER BY recorded_at ASC, event_id ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("events", e))?;

        rows.into_iter().map(row_to_record).collect()
    }
}

fn row_to_record(row: sqlx::postgres::PgRow) -> Result<EventRecord, EventLogError> {
    let event_id: Uuid = row
        .try_get("event_id")
        .map_err(|e| map_sqlx_error("decode event_id", e))?;
    let payload: serde_json::Value = row
        .try_get("payload")
        .map_err(|e| map_sqlx_error("decode payload", e))?;
    let recorded_at: DateTime<Utc> = row
        .try_get("recorded_at")
        .map_err(|e| map_sqlx_error("decode recorded_at", e))?;

    Ok(EventRecord::from_parts(
        EventId::from_uuid(event_id),
        payload,
        recorded_at,
    ))
}

fn map_sqlx_error(operation: &str, error: sqlx::Error) -> EventLogError {
    EventLogError::Storage(format!("{operation}: {error}"))
}
