//! Category search.
//!
//! The browser client filters the rendered catalog by category name on every
//! keystroke; the same function backs that path so the behavior is testable
//! here. Filtering builds a new catalog and never mutates the source.

use crate::catalog::Catalog;

impl Catalog {
    /// Keep only groups whose category name contains `query`,
    /// case-insensitively. An empty query matches every group.
    ///
    /// Match is on the category name only, never on product or brand.
    pub fn filter_by_category(&self, query: &str) -> Catalog {
        let needle = query.to_lowercase();
        let mut filtered = Catalog::default();
        for (category, items) in self.groups() {
            if category.to_lowercase().contains(&needle) {
                for item in items {
                    filtered.push(category.to_string(), item.clone());
                }
            }
        }
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let input = "Order_Number,Product,Category,Brand\n\
                     A1,Shirt,Apparel,Acme\n\
                     A2,Mug,Kitchen,Acme\n\
                     A3,Pot,Kitchen,Primo\n";
        Catalog::parse(input).unwrap().catalog
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let catalog = sample();
        let filtered = catalog.filter_by_category("KITCH");
        let groups: Vec<_> = filtered.groups().collect();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "Kitchen");
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn no_match_shows_nothing() {
        assert!(sample().filter_by_category("electronics").is_empty());
    }

    #[test]
    fn empty_query_restores_everything_without_mutation() {
        let catalog = sample();
        let narrowed = catalog.filter_by_category("apparel");
        assert_eq!(narrowed.group_count(), 1);

        // The source is untouched; clearing the query yields the full set.
        let restored = catalog.filter_by_category("");
        assert_eq!(restored, catalog);
    }

    #[test]
    fn match_is_on_category_not_product_or_brand() {
        // "Mug" is a product, "Acme" a brand; neither should match.
        assert!(sample().filter_by_category("mug").is_empty());
        assert!(sample().filter_by_category("acme").is_empty());
    }
}
