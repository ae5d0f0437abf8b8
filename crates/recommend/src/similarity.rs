//! Item-item cosine similarity from user interaction history.
//!
//! Each identified user becomes a sparse vector of interaction strengths over
//! products; items are compared as columns of that user-item matrix. Events
//! without a `user_id` can't contribute to collaborative signals and are
//! skipped here (they still feed trending and personalization).

use std::collections::{HashMap, HashSet};

use storefront_events::{ActionKind, EventRecord};

/// Interaction strength per action. Orders weigh double views; cancels carry
/// no collaborative signal.
pub fn interaction_strength(action: ActionKind) -> Option<f64> {
    match action {
        ActionKind::Seen => Some(1.0),
        ActionKind::Order | ActionKind::Reorder => Some(2.0),
        ActionKind::Cancel => None,
    }
}

/// Item-item similarity model.
#[derive(Debug, Default)]
pub struct ItemSimilarity {
    /// For each product, its neighbors with cosine similarity > 0.
    neighbors: HashMap<String, Vec<(String, f64)>>,
}

impl ItemSimilarity {
    /// Build the model from the full event log.
    pub fn build(events: &[EventRecord]) -> Self {
        // (product -> (user -> strength)); strongest interaction wins when a
        // user touched the same product more than once.
        let mut columns: HashMap<String, HashMap<String, f64>> = HashMap::new();
        for event in events {
            let (Some(user), Some(product), Some(action)) =
                (event.user_id(), event.order_number(), event.action())
            else {
                continue;
            };
            let Some(strength) = interaction_strength(action) else {
                continue;
            };
            let cell = columns
                .entry(product)
                .or_default()
                .entry(user.to_string())
                .or_insert(0.0);
            *cell = cell.max(strength);
        }

        let products: Vec<&String> = columns.keys().collect();
        let mut neighbors: HashMap<String, Vec<(String, f64)>> = HashMap::new();
        for (i, a) in products.iter().enumerate() {
            for b in products.iter().skip(i + 1) {
                let sim = cosine(&columns[*a], &columns[*b]);
                if sim > 0.0 {
                    neighbors
                        .entry((**a).clone())
                        .or_default()
                        .push(((**b).clone(), sim));
                    neighbors
                        .entry((**b).clone())
                        .or_default()
                        .push(((**a).clone(), sim));
                }
            }
        }
        for list in neighbors.values_mut() {
            list.sort_by(|x, y| y.1.partial_cmp(&x.1).unwrap_or(std::cmp::Ordering::Equal).then_with(|| x.0.cmp(&y.0)));
        }

        Self { neighbors }
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Products a user interacted with (seen/ordered/reordered).
    pub fn user_history(events: &[EventRecord], user: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut history = Vec::new();
        for event in events {
            if event.user_id() != Some(user) {
                continue;
            }
            let (Some(product), Some(action)) = (event.order_number(), event.action()) else {
                continue;
            };
            if interaction_strength(action).is_none() {
                continue;
            }
            if seen.insert(product.clone()) {
                history.push(product);
            }
        }
        history
    }

    /// Rank products similar to anything in `history`, excluding the history
    /// itself, normalized so the best candidate scores 1.0.
    pub fn similar_to(&self, history: &[String]) -> Vec<(String, f64)> {
        let owned: HashSet<&String> = history.iter().collect();
        let mut scores: HashMap<String, f64> = HashMap::new();
        for product in history {
            let Some(neighbors) = self.neighbors.get(product) else {
                continue;
            };
            for (candidate, sim) in neighbors {
                if owned.contains(candidate) {
                    continue;
                }
                *scores.entry(candidate.clone()).or_insert(0.0) += sim;
            }
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
}

fn cosine(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(user, va)| b.get(user).map(|vb| va * vb))
        .sum();
    if dot == 0.0 {
        return 0.0;
    }
    let norm_a: f64 = a.values().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|v| v * v).sum::<f64>().sqrt();
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_core::EventId;

    fn event(user: &str, action: &str, product: &str) -> EventRecord {
        EventRecord::from_parts(
            EventId::new(),
            json!({
                "user_id": user,
                "action": action,
                "detail": {"order_number": product},
            }),
            chrono::Utc::now(),
        )
    }

    #[test]
    fn co_interacted_items_are_similar() {
        // Both users touched A and B; C is only ever seen alone.
        let events = vec![
            event("u1", "Order", "A"),
            event("u1", "Seen", "B"),
            event("u2", "Seen", "A"),
            event("u2", "Order", "B"),
            event("u3", "Seen", "C"),
        ];
        let model = ItemSimilarity::build(&events);
        let ranked = model.similar_to(&["A".to_string()]);
        assert_eq!(ranked[0].0, "B");
        assert!(!ranked.iter().any(|(p, _)| p == "C"));
    }

    #[test]
    fn history_items_are_never_recommended_back() {
        let events = vec![
            event("u1", "Order", "A"),
            event("u1", "Order", "B"),
            event("u2", "Order", "A"),
            event("u2", "Order", "B"),
        ];
        let model = ItemSimilarity::build(&events);
        let ranked = model.similar_to(&["A".to_string(), "B".to_string()]);
        assert!(ranked.is_empty());
    }

    #[test]
    fn anonymous_events_contribute_nothing() {
        let anonymous = EventRecord::from_parts(
            EventId::new(),
            json!({"action": "Order", "detail": {"order_number": "A"}}),
            chrono::Utc::now(),
        );
        let model = ItemSimilarity::build(&[anonymous]);
        assert!(model.is_empty());
    }

    #[test]
    fn cancels_carry_no_collaborative_signal() {
        let events = vec![
            event("u1", "Cancel", "A"),
            event("u2", "Cancel", "A"),
            event("u1", "Cancel", "B"),
            event("u2", "Cancel", "B"),
        ];
        assert!(ItemSimilarity::build(&events).is_empty());
    }

    #[test]
    fn user_history_is_deduplicated_in_first_seen_order() {
        let events = vec![
            event("u1", "Seen", "A"),
            event("u1", "Order", "A"),
            event("u1", "Seen", "B"),
            event("u2", "Seen", "Z"),
        ];
        assert_eq!(ItemSimilarity::user_history(&events, "u1"), vec!["A", "B"]);
    }
}
