//! Feed assembly.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_catalog::Catalog;
use storefront_events::EventRecord;

use crate::personalization;
use crate::similarity::ItemSimilarity;
use crate::trending;

/// Maximum items per rail.
pub const FEED_SIZE: usize = 10;

/// Trending candidates considered before dedup/capping.
const TRENDING_POOL: usize = 20;

/// The three feed rails, as catalog order numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Feed {
    pub for_you: Vec<String>,
    pub based_on_watchlist: Vec<String>,
    pub trending: Vec<String>,
}

/// Build the full feed for an (optionally identified) user.
///
/// Products the user has already interacted with are never recommended, and
/// no product appears on more than one rail: rails are finalized in order
/// (collaborative, personalization, trending) against a shared exclusion
/// set. Anonymous events count toward the viewer's history — without a
/// user id there is no one else to attribute them to.
pub fn build_feed(
    events: &[EventRecord],
    catalog: &Catalog,
    user: Option<&str>,
    now: DateTime<Utc>,
) -> Feed {
    // Everything the viewer has plausibly touched already.
    let mut excluded: HashSet<String> = events
        .iter()
        .filter(|e| e.user_id().is_none() || e.user_id() == user)
        .filter_map(|e| e.order_number())
        .collect();

    let finalize = |candidates: Vec<String>, excluded: &mut HashSet<String>| {
        let mut rail = Vec::new();
        for candidate in candidates {
            if excluded.insert(candidate.clone()) {
                rail.push(candidate);
                if rail.len() >= FEED_SIZE {
                    break;
                }
            }
        }
        rail
    };

    let for_you = match user {
        Some(user) => {
            let model = ItemSimilarity::build(events);
            let history = ItemSimilarity::user_history(events, user);
            let ranked = model
                .similar_to(&history)
                .into_iter()
                .map(|(id, _)| id)
                .collect();
            finalize(ranked, &mut excluded)
        }
        None => Vec::new(),
    };

    let based_on_watchlist = finalize(personalization::recommend(events, catalog), &mut excluded);

    let trending_pool: Vec<String> = trending::trending_scores(events, now)
        .into_iter()
        .take(TRENDING_POOL)
        .map(|(id, _)| id)
        .collect();
    let trending = finalize(trending_pool, &mut excluded);

    Feed {
        for_you,
        based_on_watchlist,
        trending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_core::EventId;

    fn event(user: Option<&str>, action: &str, product: &str, category: &str) -> EventRecord {
        let mut payload = json!({
            "action": action,
            "detail": {"order_number": product, "category": category},
        });
        if let Some(user) = user {
            payload["user_id"] = json!(user);
        }
        EventRecord::from_parts(EventId::new(), payload, Utc::now())
    }

    fn catalog() -> Catalog {
        Catalog::parse(
            "Order_Number,Product,Category,Brand\n\
             1,Pan,Kitchen,K\n\
             2,Pot,Kitchen,K\n\
             3,Whisk,Kitchen,K\n\
             4,Shirt,Apparel,S\n",
        )
        .unwrap()
        .catalog
    }

    #[test]
    fn viewer_history_is_excluded_from_every_rail() {
        // The anonymous viewer saw product 1 in Kitchen; personalization
        // should suggest the rest of Kitchen without repeating 1.
        let events = vec![event(None, "Seen", "1", "Kitchen")];
        let feed = build_feed(&events, &catalog(), None, Utc::now());
        assert!(!feed.based_on_watchlist.contains(&"1".to_string()));
        assert!(!feed.trending.contains(&"1".to_string()));
        assert_eq!(feed.based_on_watchlist, vec!["2", "3"]);
    }

    #[test]
    fn no_product_repeats_across_rails() {
        let events = vec![
            event(Some("alice"), "Order", "1", "Kitchen"),
            event(Some("bob"), "Order", "1", "Kitchen"),
            event(Some("bob"), "Order", "2", "Kitchen"),
            event(Some("alice"), "Seen", "3", "Kitchen"),
        ];
        let feed = build_feed(&events, &catalog(), Some("alice"), Utc::now());

        let mut all: Vec<&String> = feed
            .for_you
            .iter()
            .chain(&feed.based_on_watchlist)
            .chain(&feed.trending)
            .collect();
        let before = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), before);
    }

    #[test]
    fn anonymous_viewer_gets_no_collaborative_rail() {
        let events = vec![
            event(Some("bob"), "Order", "1", "Kitchen"),
            event(Some("bob"), "Order", "2", "Kitchen"),
        ];
        let feed = build_feed(&events, &catalog(), None, Utc::now());
        assert!(feed.for_you.is_empty());
    }

    #[test]
    fn collaborative_rail_suggests_what_similar_users_touched() {
        // alice and bob overlap on 1; bob also ordered 2, which alice hasn't seen.
        let events = vec![
            event(Some("alice"), "Order", "1", "Kitchen"),
            event(Some("bob"), "Order", "1", "Kitchen"),
            event(Some("bob"), "Order", "2", "Kitchen"),
        ];
        let feed = build_feed(&events, &catalog(), Some("alice"), Utc::now());
        assert_eq!(feed.for_you, vec!["2"]);
    }

    #[test]
    fn rails_cap_at_feed_size() {
        let mut csv = String::from("Order_Number,Product,Category,Brand\n");
        let mut events = Vec::new();
        for i in 0..30 {
            csv.push_str(&format!("{i},Gadget{i},Gizmos,G\n"));
            if i < 5 {
                // a little activity so the category scores positive
                events.push(event(None, "Seen", "unrelated", "Gizmos"));
            }
        }
        let catalog = Catalog::parse(&csv).unwrap().catalog;
        let feed = build_feed(&events, &catalog, None, Utc::now());
        assert_eq!(feed.based_on_watchlist.len(), FEED_SIZE);
    }

    #[test]
    fn empty_log_yields_an_empty_feed() {
        let feed = build_feed(&[], &catalog(), Some("alice"), Utc::now());
        assert_eq!(feed, Feed::default());
    }
}
