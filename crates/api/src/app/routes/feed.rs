use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use storefront_recommend::build_feed;

use crate::app::{dto::FeedResponse, errors, services::AppServices};

/// `GET /api/feed?user=<id>` — the three recommendation rails.
///
/// `user` selects the collaborative target; without it the viewer is
/// anonymous and the "for you" rail is empty.
pub async fn get_feed(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<HashMap<String, String>>,
) -> axum::response::Response {
    let catalog = match services.load_catalog().await {
        Ok(c) => c,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    let events = match services.event_log.events().await {
        Ok(events) => events,
        Err(e) => return errors::event_log_error_to_response(e),
    };

    let user = params.get("user").map(String::as_str);
    let feed = build_feed(&events, &catalog, user, Utc::now());

    Json(FeedResponse::resolve(&feed, &catalog)).into_response()
}
