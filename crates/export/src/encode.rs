//! CSV encoder
//!
//! Every cell, header included, is wrapped in double quotes and fields are
//! separated by commas. Records end with a single `\n`. Cells pass through
//! [`sanitize`] first, so no quote escaping is ever needed.

use std::borrow::Cow;
use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::Result;
use crate::row::Row;
use crate::sanitize::sanitize;
use crate::schema::Schema;

/// Record terminator
pub const LINE_TERMINATOR: u8 = b'\n';

/// Streaming CSV writer for export rows
///
/// The writer is strict about width: every record must have as many cells as
/// the first one written, otherwise the write fails.
pub struct CsvEncoder<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> CsvEncoder<W> {
    pub fn new(sink: W) -> Self {
        let writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(LINE_TERMINATOR))
            .flexible(false)
            .from_writer(sink);

        Self { writer, rows: 0 }
    }

    /// Write the header record
    pub fn write_header(&mut self, schema: &Schema) -> Result<()> {
        self.writer
            .write_record(schema.columns().map(cell_bytes))?;
        Ok(())
    }

    /// Write one data record
    pub fn write_row(&mut self, row: &Row) -> Result<()> {
        self.writer
            .write_record(row.cells().iter().map(|cell| cell_bytes(cell)))?;
        self.rows += 1;
        Ok(())
    }

    /// Data records written so far, header excluded
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the sink
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

/// Sanitized cell bytes, borrowed unless something had to be stripped
fn cell_bytes(value: &str) -> Cow<'_, [u8]> {
    match sanitize(value) {
        Cow::Borrowed(clean) => Cow::Borrowed(clean.as_bytes()),
        Cow::Owned(clean) => Cow::Owned(clean.into_bytes()),
    }
}

/// Encode a header and rows into a complete byte buffer
pub fn encode(schema: &Schema, rows: &[Row]) -> Result<Vec<u8>> {
    let mut encoder = CsvEncoder::new(Vec::new());
    encoder.write_header(schema)?;
    for row in rows {
        encoder.write_row(row)?;
    }
    encoder.finish()
}
