//! Serve command - Run the Tally export server

use anyhow::Result;
use clap::Args;
use tally_config::Config;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::cmd::api_server::start_api_server;

/// Serve command arguments
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override `[api_server] host`
    #[arg(long)]
    pub host: Option<String>,

    /// Override `[api_server] port`
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Run the serve command
pub async fn run(mut config: Config, args: ServeArgs) -> Result<()> {
    if let Some(host) = args.host {
        config.api_server.host = host;
    }
    if let Some(port) = args.port {
        config.api_server.port = port;
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        platform = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        "Tally starting"
    );

    if let Err(e) = run_server(config).await {
        error!(error = %e, "server error");
        return Err(e);
    }

    info!("Tally shutdown complete");
    Ok(())
}

/// Main server run loop
async fn run_server(config: Config) -> Result<()> {
    let cancel = CancellationToken::new();

    let api_handle = start_api_server(&config, cancel.clone()).await?;

    wait_for_shutdown().await;

    info!("shutdown signal received, stopping server...");
    cancel.cancel();

    if let Err(e) = api_handle.await {
        warn!(error = %e, "API server task panicked during shutdown");
    }

    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn wait_for_shutdown() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
