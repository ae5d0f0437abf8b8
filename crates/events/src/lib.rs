//! Interaction event contract.
//!
//! The event log is an append-only sink of user interaction events. This
//! crate defines the schema-on-write contract (`EventRecord`) and the known
//! action taxonomy (`ActionKind`); storage backends live in
//! `storefront-infra`.

pub mod action;
pub mod record;

pub use action::ActionKind;
pub use record::EventRecord;
