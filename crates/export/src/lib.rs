//! Tally - Export
//!
//! Flattens a heterogeneous item set into one CSV table.
//!
//! # Pipeline
//!
//! ```text
//! items ──► unify ──► Schema ──► project ──► Row ──► sanitize ──► encode ──► ExportDocument
//! ```
//!
//! - [`unify`] - ordered union of attribute keys, first-seen order
//! - [`project`] - one row per item, aligned to the schema
//! - [`sanitize`] - strips CR, LF and double quotes from a cell
//! - [`CsvEncoder`] - every cell quoted, rows terminated by `\n`
//!
//! # Example
//!
//! ```
//! use tally_catalog::Item;
//! use tally_export::build_document;
//!
//! let items = vec![
//!     Item::new(1, "Widget").with_attribute("color", "red"),
//!     Item::new(2, "Gadget").with_attribute("size", "L"),
//! ];
//!
//! let doc = build_document(&items).unwrap();
//! assert_eq!(doc.row_count(), 2);
//! assert_eq!(doc.column_count(), 7);
//! ```

mod document;
mod encode;
mod error;
mod row;
mod sanitize;
mod schema;

#[cfg(test)]
mod document_test;

pub use document::{DocumentStats, ExportDocument, build_document, write_document};
pub use encode::{CsvEncoder, LINE_TERMINATOR, encode};
pub use error::{ExportError, Result};
pub use row::{Row, project};
pub use sanitize::sanitize;
pub use schema::{FIXED_COLUMNS, Schema, unify};
