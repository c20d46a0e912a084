//! Export command - Write the published catalog as CSV without the server
//!
//! # Usage
//!
//! ```bash
//! # To stdout
//! tally export --catalog data/catalog.json > products.csv
//!
//! # To a file, catalog path from config
//! tally export --output products.csv
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tally_catalog::{CatalogSource, Item, JsonFileCatalog};
use tally_config::Config;
use tally_export::{DocumentStats, write_document};
use tracing::info;

/// Export command arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Catalog JSON file (defaults to `[catalog] path`)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the export command
pub async fn run(config: &Config, args: ExportArgs) -> Result<()> {
    let catalog_path = args
        .catalog
        .as_deref()
        .unwrap_or(config.catalog.path.as_path());
    let catalog = JsonFileCatalog::new(catalog_path);

    let items = catalog
        .fetch_published_items()
        .await
        .with_context(|| format!("failed to read catalog {}", catalog_path.display()))?;

    if let Some(max) = config.export.max_items
        && items.len() > max
    {
        anyhow::bail!(
            "export of {} items exceeds the limit of {} ([export] max_items)",
            items.len(),
            max
        );
    }

    let stats = match &args.output {
        Some(path) => write_to_file(&items, path)?,
        None => write_to(&items, io::stdout().lock())?,
    };

    info!(
        catalog = %catalog_path.display(),
        output = %args
            .output
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdout".to_string()),
        rows = stats.rows,
        columns = stats.columns,
        "export written"
    );

    Ok(())
}

fn write_to_file(items: &[Item], path: &Path) -> Result<DocumentStats> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    write_to(items, BufWriter::new(file))
        .with_context(|| format!("failed to write {}", path.display()))
}

fn write_to<W: Write>(items: &[Item], sink: W) -> Result<DocumentStats> {
    let (_sink, stats) = write_document(items, sink).context("failed to encode export")?;
    Ok(stats)
}
