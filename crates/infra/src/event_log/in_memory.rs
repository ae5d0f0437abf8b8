use std::sync::RwLock;

use async_trait::async_trait;
use storefront_events::EventRecord;

use super::r#trait::{EventLog, EventLogError};

/// In-memory append-only event log.
///
/// Intended for tests/dev and for running without a database configured.
/// Contents are lost on process exit.
#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    records: RwLock<Vec<EventRecord>>,
}

impl InMemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EventLog for InMemoryEventLog {
    async fn append(&self, record: EventRecord) -> Result<(), EventLogError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| EventLogError::Storage("lock poisoned".to_string()))?;
        records.push(record);
        Ok(())
    }

    async fn events(&self) -> Result<Vec<EventRecord>, EventLogError> {
        let records = self
            .records
            .read()
            .map_err(|_| EventLogError::Storage("lock poisoned".to_string()))?;
        Ok(records.clone())
    }
}
