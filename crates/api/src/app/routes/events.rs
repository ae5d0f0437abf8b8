use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::Value as JsonValue;

use storefront_events::{ActionKind, EventRecord};

use crate::app::{dto, errors, services::AppServices};

/// `POST /api/log` — append an arbitrary client event.
///
/// Any JSON-decodable body is accepted verbatim: no field whitelist, no size
/// limit, no duplicate suppression. The server contributes the id and the
/// timestamp; nothing else is touched.
pub async fn log_event(
    Extension(services): Extension<Arc<AppServices>>,
    Json(payload): Json<JsonValue>,
) -> axum::response::Response {
    let record = EventRecord::new(payload);
    match services.event_log.append(record).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(serde_json::json!({"message": "Event logged successfully"})),
        )
            .into_response(),
        Err(e) => errors::event_log_error_to_response(e),
    }
}

/// `POST /api/event` — log a validated action against a known product.
///
/// Unlike `/api/log`, the detail envelope is built server-side from the
/// catalog, so the stored event can't disagree with the product it names.
pub async fn record_event(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RecordEventRequest>,
) -> axum::response::Response {
    let (Some(action), Some(product_id)) = (body.action.clone(), body.product_id_str()) else {
        return errors::json_message(StatusCode::BAD_REQUEST, "Missing required fields");
    };

    let catalog = match services.load_catalog().await {
        Ok(c) => c,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    let Some((category, item)) = catalog.find_by_order_number(&product_id) else {
        return errors::json_message(StatusCode::NOT_FOUND, "Product not found");
    };

    // Canonicalize known actions ("seen" -> "Seen"); unknown ones are stored
    // as sent.
    let action = action
        .parse::<ActionKind>()
        .map(|a| a.as_str().to_string())
        .unwrap_or(action);

    let payload = serde_json::json!({
        "action": action,
        "detail": {
            "category": category,
            "order_number": item.order_number,
            "product": item.product,
            "brand": item.brand,
        },
        "clientTimestamp": Utc::now().to_rfc3339(),
    });

    match services.event_log.append(EventRecord::new(payload)).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(serde_json::json!({"status": "success"})),
        )
            .into_response(),
        Err(e) => errors::event_log_error_to_response(e),
    }
}
