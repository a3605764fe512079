//! reel-server binary.
//!
//! Reads `reel.toml` (or the path given with `--config`) plus the
//! environment, seeds an in-memory movie collection from JSON, and serves the
//! movie API over HTTP. Nothing is written back to the seed file.
//!
//! ```
//! PORT=8080 cargo run -p reel-server -- --seed data/movies.json
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use reel_server::ServerConfig;
use reel_store_memory::MemoryStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Reel movie catalogue server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "reel.toml")]
  config: PathBuf,

  /// Seed file to load instead of the configured `seed_path`.
  #[arg(short, long)]
  seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;
  if let Some(seed) = cli.seed {
    server_cfg.seed_path = seed;
  }

  let cors = server_cfg
    .cors_policy()
    .context("failed to build CORS allow-list")?;

  let store = MemoryStore::open_seed(&server_cfg.seed_path)
    .await
    .with_context(|| format!("failed to load seed from {:?}", server_cfg.seed_path))?;

  let app = reel_server::app(Arc::new(store), cors);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
