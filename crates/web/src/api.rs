//! Thin async bindings to the backend HTTP API.

use gloo_net::http::Request;
use serde::Serialize;

use storefront_catalog::Catalog;

/// Context sent with every logged action.
#[derive(Debug, Clone, Serialize)]
pub struct ActionDetail {
    pub category: String,
    pub order_number: String,
    pub product: String,
    pub brand: String,
}

#[derive(Debug, Serialize)]
struct LogRequest<'a> {
    action: &'a str,
    detail: &'a ActionDetail,
    #[serde(rename = "clientTimestamp")]
    client_timestamp: String,
}

/// Fetch the full grouped catalog.
pub async fn fetch_items() -> Result<Catalog, String> {
    let response = Request::get("/api/items")
        .send()
        .await
        .map_err(|e| format!("fetch failed: {e}"))?;
    if !response.ok() {
        return Err(format!("fetch failed: HTTP {}", response.status()));
    }
    response
        .json::<Catalog>()
        .await
        .map_err(|e| format!("bad catalog payload: {e}"))
}

/// Fire one action log. Fire-and-forget from the UI's point of view: the
/// caller only gets a console message out of the result.
pub async fn log_action(action: &str, detail: &ActionDetail) -> Result<(), String> {
    let body = LogRequest {
        action,
        detail,
        client_timestamp: now_iso(),
    };
    Request::post("/api/log")
        .json(&body)
        .map_err(|e| format!("encode failed: {e}"))?
        .send()
        .await
        .map_err(|e| format!("log failed: {e}"))?;
    Ok(())
}

/// Current wall-clock time as an ISO-8601 string, from the browser clock.
fn now_iso() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().to_iso_string().into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_request_matches_the_wire_contract() {
        let detail = ActionDetail {
            category: "Kitchen".to_string(),
            order_number: "A2".to_string(),
            product: "Mug".to_string(),
            brand: "Acme".to_string(),
        };
        let body = LogRequest {
            action: "Reorder",
            detail: &detail,
            client_timestamp: "2026-08-29T10:15:00Z".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["action"], "Reorder");
        assert_eq!(json["detail"]["order_number"], "A2");
        assert!(json["clientTimestamp"].is_string());
    }
}
