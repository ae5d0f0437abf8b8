use axum::{
    routing::{get, post},
    Router,
};

pub mod catalog;
pub mod events;
pub mod feed;
pub mod system;

/// Full routing tree.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/api/items", get(catalog::get_items))
        .route("/api/log", post(events::log_event))
        .route("/api/event", post(events::record_event))
        .route("/api/feed", get(feed::get_feed))
}
