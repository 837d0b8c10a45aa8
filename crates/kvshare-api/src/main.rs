//! # kvshare — Binary Entry Point
//!
//! Starts the Axum HTTP server. Configuration comes from flags with
//! environment fallbacks.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use kvshare_api::{AdminCredentials, AppConfig, AppState};
use kvshare_store::{FsStore, KvStore, MemoryStore};

/// Text file drop with admin-gated uploads and per-user history.
#[derive(Parser)]
#[command(name = "kvshare", version, about)]
struct Cli {
    /// Port to listen on (all interfaces).
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Administrator login name.
    #[arg(long, env = "ADMIN_USERNAME")]
    admin_username: Option<String>,

    /// Administrator password.
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    admin_password: Option<String>,

    /// Directory for the filesystem store. In-memory store when absent.
    #[arg(long, env = "KVSHARE_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let admin = match (cli.admin_username, cli.admin_password) {
        (Some(username), Some(password)) => Some(AdminCredentials::new(username, password)),
        _ => {
            tracing::warn!("ADMIN_USERNAME/ADMIN_PASSWORD not both set; admin login is disabled");
            None
        }
    };

    let store: Arc<dyn KvStore> = match &cli.data_dir {
        Some(dir) => {
            let store = FsStore::new(dir)
                .await
                .with_context(|| format!("failed to open data directory {}", dir.display()))?;
            tracing::info!(root = %store.root().display(), "using filesystem store");
            Arc::new(store)
        }
        None => {
            tracing::warn!("KVSHARE_DATA_DIR not set; files are kept in memory and lost on exit");
            Arc::new(MemoryStore::new())
        }
    };

    let config = AppConfig {
        port: cli.port,
        admin,
    };
    tracing::debug!(?config, "configuration loaded");

    let app = kvshare_api::app(AppState::with_config(config, store));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], cli.port));
    tracing::info!("kvshare listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
