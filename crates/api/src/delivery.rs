//! Response delivery
//!
//! A finished document is returned as a CSV attachment. In spool mode the
//! bytes take a detour through a temporary file first; the file is always
//! removed afterwards and a failed removal only logs.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tally_export::ExportDocument;
use tracing::{debug, warn};

use crate::error::{ApiError, Result};

const SPOOL_PREFIX: &str = "tally-export-";
const SPOOL_SUFFIX: &str = ".csv";

/// Attachment name for a configured base name
///
/// Double quotes and control characters are dropped and `.csv` is appended.
pub fn attachment_filename(base: &str) -> String {
    let cleaned: String = base
        .chars()
        .filter(|c| *c != '"' && !c.is_control())
        .collect();
    format!("{}.csv", cleaned.trim())
}

/// CSV file download response
#[derive(Debug)]
pub struct CsvAttachment {
    filename: String,
    body: Vec<u8>,
}

impl CsvAttachment {
    pub fn new(filename_base: &str, body: Vec<u8>) -> Self {
        Self {
            filename: attachment_filename(filename_base),
            body,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl IntoResponse for CsvAttachment {
    fn into_response(self) -> Response {
        let headers = [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", self.filename),
            ),
            (header::EXPIRES, "0".to_string()),
            (header::CACHE_CONTROL, "must-revalidate".to_string()),
            (header::PRAGMA, "public".to_string()),
            (header::CONTENT_LENGTH, self.body.len().to_string()),
        ];

        (StatusCode::OK, headers, self.body).into_response()
    }
}

/// Round-trip `document` through a temporary file in `dir`
///
/// Runs on the blocking pool. The temp file is removed before returning,
/// whether or not the read succeeded.
pub async fn spool(document: ExportDocument, dir: PathBuf) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || spool_blocking(document.as_bytes(), &dir))
        .await
        .map_err(|e| ApiError::internal(format!("spool task failed: {e}")))?
}

fn spool_blocking(bytes: &[u8], dir: &Path) -> Result<Vec<u8>> {
    let mut file = tempfile::Builder::new()
        .prefix(SPOOL_PREFIX)
        .suffix(SPOOL_SUFFIX)
        .tempfile_in(dir)
        .map_err(|e| ApiError::internal(format!("failed to create spool file: {e}")))?;

    let path = file.path().to_path_buf();
    debug!(path = %path.display(), bytes = bytes.len(), "spooling export");

    let read_back = file
        .write_all(bytes)
        .and_then(|()| file.flush())
        .and_then(|()| std::fs::read(&path));

    let removed = file.close();
    finish_spool(read_back, removed, &path)
}

/// Outcome of a spool round-trip; removal failures are logged and dropped
fn finish_spool(
    read_back: io::Result<Vec<u8>>,
    removed: io::Result<()>,
    path: &Path,
) -> Result<Vec<u8>> {
    if let Err(e) = removed {
        warn!(path = %path.display(), error = %e, "failed to remove spool file");
    }

    read_back.map_err(|e| ApiError::internal(format!("spool round-trip failed: {e}")))
}
