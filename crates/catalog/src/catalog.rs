//! Category-grouped catalog built from a CSV order export.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::record;

/// Column names the export must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Order_Number", "Product", "Category", "Brand"];

/// One order row of the catalog. The category is a grouping key only and is
/// not stored on the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub order_number: String,
    pub product: String,
    pub brand: String,
}

/// Catalog parse failure. All-or-nothing: no partial catalog is ever produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The input had no header record at all.
    #[error("catalog CSV is empty")]
    EmptyInput,

    /// A required header column is absent (exact-name match).
    #[error("required column missing: {0}")]
    MissingColumn(&'static str),
}

/// The grouped catalog plus what the parse had to drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCatalog {
    pub catalog: Catalog,
    /// Rows excluded because their category was empty after trimming.
    /// Exclusion is part of the observable contract; the count exists so the
    /// caller can surface it instead of dropping rows silently.
    pub skipped_rows: usize,
}

/// Mapping from category to its items.
///
/// Group order is the category's first appearance in the file; item order is
/// CSV row order. Serializes to a JSON object whose key order preserves
/// exactly that, which is why this is a `Vec` of groups rather than a map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    groups: Vec<(String, Vec<CatalogItem>)>,
}

/// Resolved positions of the required columns in the header record.
struct ColumnIndex {
    order_number: usize,
    product: usize,
    category: usize,
    brand: usize,
}

impl ColumnIndex {
    fn locate(header: &[String]) -> Result<Self, CatalogError> {
        let find = |name: &'static str| {
            header
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(CatalogError::MissingColumn(name))
        };
        Ok(Self {
            order_number: find("Order_Number")?,
            product: find("Product")?,
            category: find("Category")?,
            brand: find("Brand")?,
        })
    }
}

impl Catalog {
    /// Parse a full CSV export into the grouped catalog.
    ///
    /// The first record is the header; the four required columns are located
    /// by exact name. Fields are trimmed. Ragged rows yield empty-string
    /// fields rather than an error; no numeric validation, no duplicate
    /// detection. Rows with an empty category are excluded and counted.
    pub fn parse(input: &str) -> Result<ParsedCatalog, CatalogError> {
        let mut records = record::read_records(input).into_iter();
        let header = records.next().ok_or(CatalogError::EmptyInput)?;
        let columns = ColumnIndex::locate(&header)?;

        let mut catalog = Catalog::default();
        let mut skipped_rows = 0usize;

        for row in records {
            let field = |i: usize| row.get(i).map(|f| f.trim()).unwrap_or("").to_string();

            let category = field(columns.category);
            if category.is_empty() {
                skipped_rows += 1;
                continue;
            }

            catalog.push(
                category,
                CatalogItem {
                    order_number: field(columns.order_number),
                    product: field(columns.product),
                    brand: field(columns.brand),
                },
            );
        }

        Ok(ParsedCatalog {
            catalog,
            skipped_rows,
        })
    }

    /// Append an item to its category group, creating the group on first use.
    pub fn push(&mut self, category: String, item: CatalogItem) {
        match self.groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, items)) => items.push(item),
            None => self.groups.push((category, vec![item])),
        }
    }

    /// Iterate groups in first-seen order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[CatalogItem])> {
        self.groups.iter().map(|(c, items)| (c.as_str(), items.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of category groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total item count across all groups.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|(_, items)| items.len()).sum()
    }

    /// Locate an item (and its category) by order number.
    pub fn find_by_order_number(&self, order_number: &str) -> Option<(&str, &CatalogItem)> {
        self.groups.iter().find_map(|(category, items)| {
            items
                .iter()
                .find(|item| item.order_number == order_number)
                .map(|item| (category.as_str(), item))
        })
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (category, items) in &self.groups {
            map.serialize_entry(category, items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a map of category to item list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Catalog, A::Error> {
                let mut groups = Vec::new();
                while let Some((category, items)) =
                    map.next_entry::<String, Vec<CatalogItem>>()?
                {
                    groups.push((category, items));
                }
                Ok(Catalog { groups })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = "Order_Number,Product,Category,Brand\n\
                         A1,Shirt,Apparel,Acme\n\
                         A2,Mug,Kitchen,Acme\n";

    #[test]
    fn groups_by_category_in_file_order() {
        let parsed = Catalog::parse(BASIC).unwrap();
        let json = serde_json::to_string(&parsed.catalog).unwrap();
        assert_eq!(
            json,
            r#"{"Apparel":[{"order_number":"A1","product":"Shirt","brand":"Acme"}],"Kitchen":[{"order_number":"A2","product":"Mug","brand":"Acme"}]}"#
        );
    }

    #[test]
    fn category_order_is_first_seen_and_items_keep_row_order() {
        let input = "Order_Number,Product,Category,Brand\n\
                     1,Pan,Kitchen,K\n\
                     2,Sock,Apparel,S\n\
                     3,Pot,Kitchen,K\n";
        let parsed = Catalog::parse(input).unwrap();
        let groups: Vec<_> = parsed.catalog.groups().collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Kitchen");
        assert_eq!(groups[1].0, "Apparel");
        let kitchen: Vec<_> = groups[0].1.iter().map(|i| i.order_number.as_str()).collect();
        assert_eq!(kitchen, ["1", "3"]);
    }

    #[test]
    fn empty_category_rows_are_excluded_and_counted() {
        let input = "Order_Number,Product,Category,Brand\n\
                     1,Pan,Kitchen,K\n\
                     2,Ghost,   ,G\n\
                     3,Blank,,B\n";
        let parsed = Catalog::parse(input).unwrap();
        assert_eq!(parsed.skipped_rows, 2);
        assert_eq!(parsed.catalog.item_count(), 1);
        assert!(parsed.catalog.find_by_order_number("2").is_none());
        assert!(parsed.catalog.find_by_order_number("3").is_none());
    }

    #[test]
    fn missing_required_column_fails_entirely() {
        let input = "Order_Number,Product,Brand\n1,Pan,K\n";
        let err = Catalog::parse(input).unwrap_err();
        assert_eq!(err, CatalogError::MissingColumn("Category"));
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(Catalog::parse("").unwrap_err(), CatalogError::EmptyInput);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let input = "Customer,Order_Number,Product,Category,Brand,Date\n\
                     Sam,1,Pan,Kitchen,K,2024-01-01\n";
        let parsed = Catalog::parse(input).unwrap();
        let (category, item) = parsed.catalog.find_by_order_number("1").unwrap();
        assert_eq!(category, "Kitchen");
        assert_eq!(item.product, "Pan");
        assert_eq!(item.brand, "K");
    }

    #[test]
    fn ragged_rows_yield_empty_fields_not_errors() {
        let input = "Order_Number,Product,Category,Brand\n1,Pan,Kitchen\n";
        let parsed = Catalog::parse(input).unwrap();
        let (_, item) = parsed.catalog.find_by_order_number("1").unwrap();
        assert_eq!(item.brand, "");
    }

    #[test]
    fn fields_are_trimmed() {
        let input = "Order_Number,Product,Category,Brand\n 1 ,  Pan , Kitchen , K \n";
        let parsed = Catalog::parse(input).unwrap();
        let (category, item) = parsed.catalog.find_by_order_number("1").unwrap();
        assert_eq!(category, "Kitchen");
        assert_eq!(item.product, "Pan");
    }

    #[test]
    fn quoted_comma_stays_inside_one_field() {
        let input = "Order_Number,Product,Category,Brand\n\
                     1,\"Mug, extra large\",Kitchen,K\n";
        let parsed = Catalog::parse(input).unwrap();
        let (_, item) = parsed.catalog.find_by_order_number("1").unwrap();
        assert_eq!(item.product, "Mug, extra large");
    }

    #[test]
    fn serde_roundtrip_preserves_group_order() {
        let parsed = Catalog::parse(BASIC).unwrap();
        let json = serde_json::to_string(&parsed.catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, parsed.catalog);
    }
}
