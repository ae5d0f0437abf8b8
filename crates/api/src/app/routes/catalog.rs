use std::sync::Arc;

use axum::{extract::Extension, Json, response::IntoResponse};

use crate::app::{errors, services::AppServices};

/// `GET /api/items` — the full catalog, grouped by category.
///
/// The CSV is re-read from disk on every request; there is no cache to
/// invalidate. Response is all-or-nothing.
pub async fn get_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.load_catalog().await {
        Ok(catalog) => Json(catalog).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
