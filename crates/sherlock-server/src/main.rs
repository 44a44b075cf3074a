//! sherlock-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), builds the
//! in-memory case store, and serves the query endpoint over HTTP.
//!
//! ```text
//! curl 'http://localhost:8001/sherlockcase?query=%7BallCases%7Bid+name%7D%7D'
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use sherlock_server::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Sherlock case query server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Address to bind, overriding the config file.
  #[arg(long)]
  host: Option<String>,

  /// Port to listen on, overriding the config file.
  #[arg(short, long)]
  port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // File < environment < command line.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("SHERLOCK"))
    .set_override_option("host", cli.host)
    .context("invalid --host")?
    .set_override_option("port", cli.port.map(i64::from))
    .context("invalid --port")?
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let state = AppState::from_config(&server_cfg);
  if server_cfg.seed {
    tracing::info!("seeded case collection with stock cases");
  }

  let app = sherlock_server::router(state);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}{}", sherlock_server::ENDPOINT);
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!("failed to listen for ctrl-c: {e}");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    use tokio::signal::unix::{SignalKind, signal};
    match signal(SignalKind::terminate()) {
      Ok(mut sigterm) => {
        sigterm.recv().await;
      }
      Err(e) => {
        tracing::error!("failed to listen for SIGTERM: {e}");
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
  tracing::info!("shutting down");
}
