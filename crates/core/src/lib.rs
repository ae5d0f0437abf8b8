//! `storefront-core` — shared domain primitives.
//!
//! This crate holds the pieces every other crate agrees on: the domain error
//! model and strongly-typed identifiers. No IO, no HTTP, no storage.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::EventId;
