//! Feed recommendation rails (pure).
//!
//! Three independent scorers over the event log plus an engine that merges
//! them into the `/api/feed` response. Everything here is deterministic
//! domain logic over borrowed slices; no IO, no clocks (callers pass `now`).

pub mod engine;
pub mod personalization;
pub mod similarity;
pub mod trending;

pub use engine::{Feed, FEED_SIZE, build_feed};
