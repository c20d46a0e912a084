//! Tally - Catalog CSV export service
//!
//! # Usage
//!
//! ```bash
//! # Run the HTTP server (default)
//! tally
//! tally --config configs/tally.toml
//!
//! # Write an export without the server
//! tally export --catalog data/catalog.json --output products.csv
//! ```

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tally_config::{Config, LogFormat};
use tracing::info;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

/// Tally - Catalog CSV export service
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (error if specified but not found)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    Serve(cmd::serve::ServeArgs),

    /// Write the published catalog as CSV to a file or stdout
    Export(cmd::export::ExportArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = cmd::load_config(cli.config.as_deref())?;
    let log_level = resolve_log_level(cli.log_level.as_deref(), &loaded.config);

    match cli.command {
        Some(Command::Export(args)) => {
            // Stdout may carry the CSV itself, so logs go to stderr
            init_logging(&log_level, loaded.config.log.format, true)?;
            loaded.log_source();
            cmd::export::run(&loaded.config, args).await
        }
        Some(Command::Serve(args)) => {
            init_logging(&log_level, loaded.config.log.format, false)?;
            loaded.log_source();
            cmd::serve::run(loaded.config, args).await
        }
        // No subcommand = run server (default behavior)
        None => {
            init_logging(&log_level, loaded.config.log.format, false)?;
            loaded.log_source();
            cmd::serve::run(loaded.config, cmd::serve::ServeArgs::default()).await
        }
    }
}

/// Resolve log level: CLI flag > config file > default "info"
fn resolve_log_level(cli_level: Option<&str>, config: &Config) -> String {
    cli_level
        .map(str::to_string)
        .unwrap_or_else(|| config.log.level.as_str().to_string())
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str, format: LogFormat, to_stderr: bool) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    let layer = fmt::layer().with_target(true).with_thread_ids(false);
    let layer: Box<dyn Layer<Registry> + Send + Sync> = match (format, to_stderr) {
        (LogFormat::Console, false) => layer.boxed(),
        (LogFormat::Console, true) => layer.with_writer(std::io::stderr).boxed(),
        (LogFormat::Json, false) => layer.json().boxed(),
        (LogFormat::Json, true) => layer.json().with_writer(std::io::stderr).boxed(),
    };

    tracing_subscriber::registry().with(layer).with(filter).init();

    info!(log_level = level, "logging initialized");
    Ok(())
}
