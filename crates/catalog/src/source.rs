//! Catalog source trait
//!
//! The exporter only needs one thing from a catalog: every published item,
//! as a complete snapshot, in a stable order.

use async_trait::async_trait;

use crate::error::Result;
use crate::item::Item;

/// Provider of published catalog items
///
/// Implementations return a fresh read-only snapshot on every call. No
/// pagination contract exists; the whole published set must fit in memory.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every published item, in catalog order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the backing store cannot be read. An error
    /// is never reported as an empty list.
    async fn fetch_published_items(&self) -> Result<Vec<Item>>;

    /// Source name for logging/debugging
    fn name(&self) -> &'static str;
}

/// In-memory catalog holding a fixed item list
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    items: Vec<Item>,
}

impl MemoryCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Total items held, published or not
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Item> for MemoryCatalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalog {
    async fn fetch_published_items(&self) -> Result<Vec<Item>> {
        Ok(self
            .items
            .iter()
            .filter(|item| item.is_published())
            .cloned()
            .collect())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
