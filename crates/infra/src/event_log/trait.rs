use async_trait::async_trait;
use thiserror::Error;

use storefront_events::EventRecord;

/// Event log storage failure.
///
/// One variant on purpose: callers can't do anything smarter than "return a
/// generic server error for this request"; the detail goes to the log.
#[derive(Debug, Error)]
pub enum EventLogError {
    #[error("event log storage failure: {0}")]
    Storage(String),
}

/// An explicit append-only log of interaction events.
///
/// Implementations own their storage resource; nothing here is global. The
/// schema-on-write contract lives on [`EventRecord`]: the log stores whatever
/// it is handed, verbatim.
#[async_trait]
pub trait EventLog: Send + Sync {
    /// Append one record. Failure affects this append only; the log stays
    /// usable.
    async fn append(&self, record: EventRecord) -> Result<(), EventLogError>;

    /// All records, append order.
    async fn events(&self) -> Result<Vec<EventRecord>, EventLogError>;
}
