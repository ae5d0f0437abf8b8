//! Catalog domain module (pure).
//!
//! This crate turns a CSV order export into the category-grouped catalog the
//! API serves and the browser client renders. It is deterministic domain
//! logic only: no IO, no HTTP, no storage. Reading the CSV file off disk
//! lives in `storefront-infra`.

pub mod catalog;
pub mod record;
pub mod search;

pub use catalog::{Catalog, CatalogError, CatalogItem, ParsedCatalog};
