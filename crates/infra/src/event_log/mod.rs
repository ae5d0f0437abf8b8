//! Append-only event log storage.
//!
//! The log trait is deliberately tiny: append one record, read them back for
//! feed scoring. There is no update, no delete, no retention path.

mod in_memory;
mod postgres;
mod r#trait;

pub use in_memory::InMemoryEventLog;
pub use postgres::PostgresEventLog;
pub use r#trait::{EventLog, EventLogError};
