//! Export document assembly

use std::borrow::Cow;
use std::io::Write;

use tally_catalog::Item;
use tracing::debug;

use crate::encode::CsvEncoder;
use crate::error::Result;
use crate::row::project;
use crate::schema::Schema;

/// Counts describing a written document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    /// Data rows, header excluded
    pub rows: usize,
    pub columns: usize,
}

/// A fully encoded CSV export held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    bytes: Vec<u8>,
    stats: DocumentStats,
}

impl ExportDocument {
    /// Encoded size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Never true for a built document, which always carries a header
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn row_count(&self) -> usize {
        self.stats.rows
    }

    pub fn column_count(&self) -> usize {
        self.stats.columns
    }

    pub fn stats(&self) -> DocumentStats {
        self.stats
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Unify, project and encode `items` into `sink`
///
/// The schema is computed from the whole item set before the first row is
/// written. Rows follow the order of `items`.
pub fn write_document<W: Write>(items: &[Item], sink: W) -> Result<(W, DocumentStats)> {
    let schema = Schema::from_items(items);
    let mut encoder = CsvEncoder::new(sink);

    encoder.write_header(&schema)?;
    for item in items {
        encoder.write_row(&project(item, &schema))?;
    }

    let stats = DocumentStats {
        rows: encoder.rows_written(),
        columns: schema.width(),
    };
    let sink = encoder.finish()?;

    debug!(
        rows = stats.rows,
        columns = stats.columns,
        dynamic_columns = schema.dynamic_columns().len(),
        "export document written"
    );

    Ok((sink, stats))
}

/// Build the complete export for `items` in memory
pub fn build_document(items: &[Item]) -> Result<ExportDocument> {
    let (bytes, stats) = write_document(items, Vec::new())?;
    Ok(ExportDocument { bytes, stats })
}
