//! Infrastructure adapters: event log storage and the catalog file source.

pub mod catalog_source;
pub mod event_log;

pub use catalog_source::{CatalogSourceError, FileCatalogSource};
pub use event_log::{EventLog, EventLogError, InMemoryEventLog, PostgresEventLog};
