//! Tally - Catalog
//!
//! Item model and the catalog sources the exporter reads from.
//!
//! # Overview
//!
//! An [`Item`] carries five core fields (ID, name, SKU, regular and sale price)
//! plus an open-ended, ordered set of [`Attributes`]. The key set differs from
//! item to item; consumers discover the union themselves.
//!
//! A [`CatalogSource`] hands out a fresh, read-only snapshot of the published
//! items on every call:
//!
//! - [`MemoryCatalog`] - fixed item list (tests, embedding)
//! - [`JsonFileCatalog`] - JSON document re-read from disk per fetch
//!
//! # JSON shape
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "name": "Widget",
//!     "sku": "W1",
//!     "regular_price": "9.99",
//!     "sale_price": "",
//!     "status": "publish",
//!     "attributes": { "color": "red", "tags": ["new", "sale"] }
//!   }
//! ]
//! ```

mod attributes;
mod error;
mod file;
mod item;
mod price;
mod source;


pub use attributes::{AttributeValue, Attributes, LIST_SEPARATOR};
pub use error::{CatalogError, Result};
pub use file::JsonFileCatalog;
pub use item::{Item, ItemId, ItemStatus};
pub use price::Price;
pub use source::{CatalogSource, MemoryCatalog};
