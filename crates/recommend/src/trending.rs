//! Time-decayed trending scores.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use storefront_events::EventRecord;

/// Events older than this don't count as "trending" (unless nothing newer
/// exists at all, see [`trending_scores`]).
pub const TRENDING_WINDOW_HOURS: i64 = 48;

/// Decay rate per hour. At 0.1/h an event 48 hours old still contributes
/// roughly 1% of a fresh one.
pub const TIME_DECAY_LAMBDA: f64 = 0.1;

/// Score products by recent interaction volume with exponential time decay.
///
/// Only events that reference a product (`detail.order_number`) contribute.
/// The window is the last [`TRENDING_WINDOW_HOURS`]; when that window is
/// empty the whole log is used instead, so a quiet shop still gets a
/// trending rail. Scores are normalized so the top product is 1.0.
///
/// Returns `(order_number, score)` ranked descending; ties break on the
/// order number so ranking is deterministic.
pub fn trending_scores(events: &[EventRecord], now: DateTime<Utc>) -> Vec<(String, f64)> {
    let cutoff = now - Duration::hours(TRENDING_WINDOW_HOURS);

    let recent: Vec<&EventRecord> = events
        .iter()
        .filter(|e| e.server_timestamp >= cutoff)
        .collect();
    let source: Vec<&EventRecord> = if recent.is_empty() {
        events.iter().collect()
    } else {
        recent
    };

    let mut scores: HashMap<String, f64> = HashMap::new();
    for event in source {
        let Some(order_number) = event.order_number() else {
            continue;
        };
        let age_hours = (now - event.server_timestamp).num_seconds() as f64 / 3600.0;
        let decay = (-TIME_DECAY_LAMBDA * age_hours.max(0.0)).exp();
        *scores.entry(order_number).or_insert(0.0) += decay;
    }

    let max = scores.values().cloned().fold(f64::MIN, f64::max);
    if max <= 0.0 {
        return Vec::new();
    }

    let mut ranked: Vec<(String, f64)> = scores
        .into_iter()
        .map(|(id, score)| (id, score / max))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then_with(|| a.0.cmp(&b.0)));
    ranked
}
