//! JSON file catalog
//!
//! Reads the catalog from a JSON document on disk. The file is re-read on
//! every fetch so each export sees the current snapshot.
//!
//! Two document shapes are accepted:
//!
//! ```json
//! [ { "id": 1, "name": "Widget" } ]
//! ```
//!
//! ```json
//! { "items": [ { "id": 1, "name": "Widget" } ] }
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::item::Item;
use crate::source::CatalogSource;

/// Wrapped document form
#[derive(Deserialize)]
struct CatalogDocument {
    items: Vec<Item>,
}

/// Catalog backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse every item in the file, published or not
    pub async fn load_all(&self) -> Result<Vec<Item>> {
        let display = self.path.display().to_string();
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CatalogError::io(&display, e))?;

        parse_items(&bytes).map_err(|e| CatalogError::parse(display, e))
    }
}

/// Parse either document shape, keeping item and attribute order
fn parse_items(bytes: &[u8]) -> serde_json::Result<Vec<Item>> {
    let first = bytes.iter().find(|b| !b.is_ascii_whitespace());
    match first {
        Some(b'{') => serde_json::from_slice::<CatalogDocument>(bytes).map(|doc| doc.items),
        _ => serde_json::from_slice(bytes),
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn fetch_published_items(&self) -> Result<Vec<Item>> {
        let all = self.load_all().await?;
        let total = all.len();
        let published: Vec<Item> = all.into_iter().filter(Item::is_published).collect();

        debug!(
            path = %self.path.display(),
            total,
            published = published.len(),
            "catalog loaded"
        );

        Ok(published)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}
