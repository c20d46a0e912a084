//! Catalog items

use serde::{Deserialize, Deserializer};

use crate::attributes::{AttributeValue, Attributes};
use crate::price::Price;

/// Unique, immutable item identifier
pub type ItemId = u64;

/// Publication status of an item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Visible in the storefront (default)
    #[default]
    Publish,
    Draft,
    Pending,
    Private,
    Trash,
}

impl ItemStatus {
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Publish)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Private => "private",
            Self::Trash => "trash",
        }
    }
}

/// One sellable catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: ItemId,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Stock keeping unit, may be empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: String,

    #[serde(default)]
    pub regular_price: Price,

    #[serde(default)]
    pub sale_price: Price,

    #[serde(default)]
    pub status: ItemStatus,

    /// Open-ended per-item key/value data
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Attributes,
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Item {
    /// Create a published item with no SKU, prices, or attributes
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sku: String::new(),
            regular_price: Price::NONE,
            sale_price: Price::NONE,
            status: ItemStatus::Publish,
            attributes: Attributes::new(),
        }
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }

    pub fn with_regular_price(mut self, price: Price) -> Self {
        self.regular_price = price;
        self
    }

    pub fn with_sale_price(mut self, price: Price) -> Self {
        self.sale_price = price;
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn is_published(&self) -> bool {
        self.status.is_published()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let item = Item::new(7, "Lamp")
            .with_sku("L-7")
            .with_regular_price("25".parse().unwrap())
            .with_attribute("color", "amber")
            .with_attribute("bulbs", vec!["E27", "E14"]);

        assert_eq!(item.id, 7);
        assert_eq!(item.sku, "L-7");
        assert_eq!(item.regular_price.to_string(), "25.00");
        assert!(!item.sale_price.is_set());
        assert_eq!(item.attributes.len(), 2);
        assert!(item.is_published());
    }

    #[test]
    fn test_deserialize_minimal() {
        let item: Item = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(item.id, 3);
        assert_eq!(item.name, "");
        assert_eq!(item.status, ItemStatus::Publish);
        assert!(item.attributes.is_empty());
    }

    #[test]
    fn test_deserialize_full() {
        let item: Item = serde_json::from_str(
            r#"{
                "id": 2,
                "name": "Gadget",
                "sku": "G1",
                "regular_price": "19.99",
                "sale_price": 14.99,
                "status": "draft",
                "attributes": {"size": "L", "color": "blue"}
            }"#,
        )
        .unwrap();

        assert_eq!(item.name, "Gadget");
        assert_eq!(item.sale_price.to_string(), "14.99");
        assert_eq!(item.status, ItemStatus::Draft);
        assert!(!item.is_published());
        assert_eq!(
            item.attributes.keys().collect::<Vec<_>>(),
            vec!["size", "color"]
        );
    }

    #[test]
    fn test_deserialize_nulls_as_empty() {
        let item: Item = serde_json::from_str(
            r#"{"id": 4, "name": null, "sku": null, "regular_price": null, "attributes": null}"#,
        )
        .unwrap();

        assert_eq!(item.name, "");
        assert_eq!(item.sku, "");
        assert!(!item.regular_price.is_set());
        assert!(item.attributes.is_empty());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result: Result<Item, _> = serde_json::from_str(r#"{"id": 1, "status": "archived"}"#);
        assert!(result.is_err());
    }
}
