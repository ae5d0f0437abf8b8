//! The append-only log's schema-on-write contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use storefront_core::EventId;

use crate::action::ActionKind;

/// One logged interaction event.
///
/// ## Schema-on-write contract
///
/// The payload is client-supplied JSON stored verbatim: no field whitelist,
/// no size limit, no duplicate suppression. The server contributes exactly
/// two fields at append time: a time-ordered `event_id` and a UTC
/// `server_timestamp`.
///
/// The contract is deliberately permissive, but well-formed clients send:
///
/// ```json
/// {
///   "action": "Seen",
///   "detail": {
///     "category": "Kitchen",
///     "order_number": "1012",
///     "product": "Mug",
///     "brand": "Acme"
///   },
///   "clientTimestamp": "2026-08-29T10:15:00Z"
/// }
/// ```
///
/// Readers (the feed rails) must tolerate any subset of these fields being
/// absent or differently shaped; the accessors below encode that leniency in
/// one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub event_id: EventId,
    pub payload: JsonValue,
    pub server_timestamp: DateTime<Utc>,
}

impl EventRecord {
    /// Stamp a client payload with a fresh id and the current server time.
    pub fn new(payload: JsonValue) -> Self {
        Self {
            event_id: EventId::new(),
            payload,
            server_timestamp: Utc::now(),
        }
    }

    /// Rebuild a record from stored parts (used by storage backends).
    pub fn from_parts(
        event_id: EventId,
        payload: JsonValue,
        server_timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id,
            payload,
            server_timestamp,
        }
    }

    /// The stored document view: all submitted fields plus `serverTimestamp`.
    ///
    /// Non-object payloads (legal, if odd) are wrapped under `"payload"` so
    /// the timestamp always has somewhere to live.
    pub fn document(&self) -> JsonValue {
        let ts = JsonValue::String(self.server_timestamp.to_rfc3339());
        match &self.payload {
            JsonValue::Object(fields) => {
                let mut doc = fields.clone();
                doc.insert("serverTimestamp".to_string(), ts);
                JsonValue::Object(doc)
            }
            other => serde_json::json!({
                "payload": other,
                "serverTimestamp": ts,
            }),
        }
    }

    /// The raw `action` string, if the payload carries one.
    pub fn action_raw(&self) -> Option<&str> {
        self.payload.get("action")?.as_str()
    }

    /// The parsed action, if present and known.
    pub fn action(&self) -> Option<ActionKind> {
        self.action_raw()?.parse().ok()
    }

    /// The `user_id` payload field, when a client identifies its user.
    pub fn user_id(&self) -> Option<&str> {
        self.payload.get("user_id")?.as_str()
    }

    /// The `detail.category` field.
    pub fn category(&self) -> Option<&str> {
        self.payload.get("detail")?.get("category")?.as_str()
    }

    /// The `detail.order_number` field, stringified.
    ///
    /// Historical data carries order numbers both as strings and as bare
    /// numbers; both identify the same product.
    pub fn order_number(&self) -> Option<String> {
        match self.payload.get("detail")?.get("order_number")? {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
