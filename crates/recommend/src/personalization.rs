//! Category personalization ("based on your recent activity").

use std::collections::HashMap;

use storefront_catalog::Catalog;
use storefront_events::{ActionKind, EventRecord};

/// How strongly each action pulls its category up or down.
///
/// Cancels drag a category hard negative so one bad experience outweighs a
/// handful of views.
pub fn category_weight(action: ActionKind) -> f64 {
    match action {
        ActionKind::Seen => 1.0,
        ActionKind::Order => 1.2,
        ActionKind::Reorder => 1.5,
        ActionKind::Cancel => -2.0,
    }
}

/// Maximum number of categories the rail draws from.
pub const TOP_CATEGORIES: usize = 3;

/// The top positively-scored categories, best first.
///
/// Events without a known action or a `detail.category` contribute nothing.
/// Categories whose net score is zero or negative never qualify.
pub fn top_categories(events: &[EventRecord]) -> Vec<String> {
    let mut scores: HashMap<String, f64> = HashMap::new();
    for event in events {
        let (Some(action), Some(category)) = (event.action(), event.category()) else {
            continue;
        };
        *scores.entry(category.to_string()).or_insert(0.0) += category_weight(action);
    }

    let mut ranked: Vec<(String, f64)> = scores
        .into_iter()
        .filter(|(_, score)| *score > 0.0)
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(TOP_CATEGORIES);
    ranked.into_iter().map(|(category, _)| category).collect()
}

/// Order numbers of every catalog item in the user's top categories,
/// catalog order, best category first.
pub fn recommend(events: &[EventRecord], catalog: &Catalog) -> Vec<String> {
    let mut out = Vec::new();
    for category in top_categories(events) {
        for (name, items) in catalog.groups() {
            if name == category {
                out.extend(items.iter().map(|i| i.order_number.clone()));
            }
        }
    }
    out
}
