//! Consistent error responses.
//!
//! The wire contract for failures is a bare `{"message": ...}` body; clients
//! show the message (or ignore it) and nothing else. Detail goes to the
//! server log, not the response.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use super::services::CatalogFetchError;
use storefront_infra::EventLogError;

pub fn json_message(status: StatusCode, message: &str) -> axum::response::Response {
    (status, axum::Json(json!({ "message": message }))).into_response()
}

/// Catalog failures are all-or-nothing 500s with a coarse message.
pub fn catalog_error_to_response(err: CatalogFetchError) -> axum::response::Response {
    match err {
        CatalogFetchError::Unavailable(e) => {
            tracing::error!(error = %e, "catalog file unreadable");
            json_message(StatusCode::INTERNAL_SERVER_ERROR, "Could not read data file.")
        }
        CatalogFetchError::Malformed(e) => {
            tracing::error!(error = %e, "catalog file malformed");
            json_message(StatusCode::INTERNAL_SERVER_ERROR, "Could not parse data file.")
        }
    }
}

/// Append failures affect the one request; liveness is unaffected.
pub fn event_log_error_to_response(err: EventLogError) -> axum::response::Response {
    tracing::error!(error = %err, "failed to log event");
    json_message(StatusCode::INTERNAL_SERVER_ERROR, "Error logging event")
}
