//! techbits server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), validates the
//! curated content and serves the page and JSON API over HTTP.
//!
//! ```
//! cargo run -p techbits-server -- --config config.toml
//! cargo run -p techbits-server -- --check
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use techbits_server::{ServerConfig, app, build_state};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "techbits facts and news server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Validate configuration and content, then exit without serving.
  #[arg(long)]
  check: bool,
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

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;

  let state =
    build_state(&server_cfg).context("content failed startup validation")?;

  if cli.check {
    tracing::info!("configuration and content OK");
    return Ok(());
  }

  let address = server_cfg.address();
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app(state)).await.context("server error")?;

  Ok(())
}
