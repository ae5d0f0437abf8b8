//! Request/response DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use storefront_catalog::{Catalog, CatalogItem};
use storefront_recommend::Feed;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /api/event`: log an action against a known product.
///
/// Fields are optional at the serde level so the handler can answer a
/// contract-level 400 (rather than a deserialization 422) when one is
/// missing. `product_id` arrives as a string or a bare number.
#[derive(Debug, Deserialize)]
pub struct RecordEventRequest {
    pub action: Option<String>,
    pub product_id: Option<JsonValue>,
}

impl RecordEventRequest {
    /// The product id as the catalog's string order number, if present.
    pub fn product_id_str(&self) -> Option<String> {
        match self.product_id.as_ref()? {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

/// One feed entry: a catalog item plus the category it lives under.
#[derive(Debug, Clone, Serialize)]
pub struct FeedEntry {
    pub category: String,
    pub order_number: String,
    pub product: String,
    pub brand: String,
}

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub for_you: Vec<FeedEntry>,
    pub based_on_watchlist: Vec<FeedEntry>,
    pub trending: Vec<FeedEntry>,
}

impl FeedResponse {
    /// Resolve a feed of order numbers against the catalog. Products that
    /// have since left the catalog are dropped from the rail.
    pub fn resolve(feed: &Feed, catalog: &Catalog) -> Self {
        let resolve_rail = |ids: &[String]| {
            ids.iter()
                .filter_map(|id| catalog.find_by_order_number(id))
                .map(|(category, item)| FeedEntry::from_item(category, item))
                .collect()
        };
        Self {
            for_you: resolve_rail(&feed.for_you),
            based_on_watchlist: resolve_rail(&feed.based_on_watchlist),
            trending: resolve_rail(&feed.trending),
        }
    }
}

impl FeedEntry {
    fn from_item(category: &str, item: &CatalogItem) -> Self {
        Self {
            category: category.to_string(),
            order_number: item.order_number.clone(),
            product: item.product.clone(),
            brand: item.brand.clone(),
        }
    }
}
