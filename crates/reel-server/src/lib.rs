//! Reel HTTP server: configuration and application assembly.
//!
//! The binary in `main.rs` is a thin wrapper over [`ServerConfig::load`] and
//! [`app`].

pub mod error;

pub use error::Error;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use reel_api::{CorsPolicy, cors::DEFAULT_ALLOWED_ORIGINS};
use reel_core::store::MovieStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Sources, lowest priority first: the defaults below, an optional TOML file,
/// `REEL_*` environment variables, and finally `PORT`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:            String,
  #[serde(default = "default_port")]
  pub port:            u16,
  /// JSON file the collection is seeded from at start-up.
  #[serde(default = "default_seed_path")]
  pub seed_path:       PathBuf,
  #[serde(default = "default_allowed_origins")]
  pub allowed_origins: Vec<String>,
}

fn default_host() -> String { "0.0.0.0".to_owned() }

fn default_port() -> u16 { 1234 }

fn default_seed_path() -> PathBuf { PathBuf::from("data/movies.json") }

fn default_allowed_origins() -> Vec<String> {
  DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:            default_host(),
      port:            default_port(),
      seed_path:       default_seed_path(),
      allowed_origins: default_allowed_origins(),
    }
  }
}

impl ServerConfig {
  /// Load configuration from `file` (if it exists) and the environment.
  pub fn load(file: &Path) -> Result<Self, Error> {
    Self::from_sources(file, std::env::var("PORT").ok())
  }

  fn from_sources(file: &Path, port: Option<String>) -> Result<Self, Error> {
    let settings = config::Config::builder()
      .add_source(config::File::from(file).required(false))
      .add_source(
        config::Environment::with_prefix("REEL")
          .try_parsing(true)
          .list_separator(",")
          .with_list_parse_key("allowed_origins"),
      )
      .set_override_option("port", port)?
      .build()?;
    Ok(settings.try_deserialize()?)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn cors_policy(&self) -> Result<CorsPolicy, Error> {
    Ok(CorsPolicy::new(&self.allowed_origins)?)
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The full application: the movie API wrapped in request tracing.
pub fn app<S>(store: Arc<S>, cors: CorsPolicy) -> Router
where
  S: MovieStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  reel_api::api_router(store, cors).layer(TraceLayer::new_for_http())
}
