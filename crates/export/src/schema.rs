//! Schema unification
//!
//! Attribute keys vary per item, so the column set is only known after
//! scanning every item. Dynamic columns keep first-seen order (items in fetch
//! order, keys in each item's native order) and are never sorted.

use std::collections::HashSet;

use tally_catalog::Item;

/// Core columns, always first and always in this order
pub const FIXED_COLUMNS: [&str; 5] = [
    "Product ID",
    "Product Name",
    "Product SKU",
    "Regular Price",
    "Sale Price",
];

/// Ordered union of every attribute key across `items`
///
/// Each key appears once, at the position of its first occurrence.
pub fn unify(items: &[Item]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut columns = Vec::new();

    for item in items {
        for key in item.attributes.keys() {
            if seen.insert(key) {
                columns.push(key.to_string());
            }
        }
    }

    columns
}

/// Column layout of one export: fixed columns then dynamic columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    dynamic: Vec<String>,
}

impl Schema {
    /// Build from an explicit dynamic column list; duplicates keep their first position
    pub fn new<I, S>(dynamic: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let dynamic = dynamic
            .into_iter()
            .map(Into::into)
            .filter(|column: &String| seen.insert(column.clone()))
            .collect();
        Self { dynamic }
    }

    /// Unify the attribute keys of `items`
    pub fn from_items(items: &[Item]) -> Self {
        Self {
            dynamic: unify(items),
        }
    }

    pub fn dynamic_columns(&self) -> &[String] {
        &self.dynamic
    }

    /// All column names, fixed first
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        FIXED_COLUMNS
            .iter()
            .copied()
            .chain(self.dynamic.iter().map(String::as_str))
    }

    /// Total column count
    pub fn width(&self) -> usize {
        FIXED_COLUMNS.len() + self.dynamic.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, keys: &[&str]) -> Item {
        keys.iter()
            .fold(Item::new(id, format!("item-{id}")), |item, key| {
                item.with_attribute(*key, "x")
            })
    }

    #[test]
    fn test_empty_items() {
        assert!(unify(&[]).is_empty());
        let schema = Schema::from_items(&[]);
        assert_eq!(schema.width(), 5);
        assert_eq!(schema.columns().collect::<Vec<_>>(), FIXED_COLUMNS.to_vec());
    }

    #[test]
    fn test_first_seen_order() {
        let items = vec![
            item(1, &["color"]),
            item(2, &["size", "color"]),
            item(3, &["weight", "size", "brand"]),
        ];
        assert_eq!(unify(&items), vec!["color", "size", "weight", "brand"]);
    }

    #[test]
    fn test_not_sorted() {
        let items = vec![item(1, &["zeta", "alpha"])];
        assert_eq!(unify(&items), vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_no_duplicates_when_shared() {
        let items: Vec<Item> = (0..50).map(|i| item(i, &["color", "size"])).collect();
        assert_eq!(unify(&items), vec!["color", "size"]);
    }

    #[test]
    fn test_deterministic_and_idempotent() {
        let items = vec![item(1, &["b", "a"]), item(2, &["c", "a", "d"])];
        let first = unify(&items);
        for _ in 0..5 {
            assert_eq!(unify(&items), first);
        }
        assert_eq!(Schema::from_items(&items), Schema::from_items(&items));
    }

    #[test]
    fn test_keys_from_later_items_kept() {
        // Only the last item has any attributes
        let items = vec![item(1, &[]), item(2, &[]), item(3, &["late"])];
        assert_eq!(unify(&items), vec!["late"]);
    }

    #[test]
    fn test_columns_fixed_then_dynamic() {
        let schema = Schema::new(["color", "size", "color"]);
        assert_eq!(schema.dynamic_columns(), ["color", "size"]);
        assert_eq!(
            schema.columns().collect::<Vec<_>>(),
            vec![
                "Product ID",
                "Product Name",
                "Product SKU",
                "Regular Price",
                "Sale Price",
                "color",
                "size"
            ]
        );
        assert_eq!(schema.width(), 7);
    }
}
