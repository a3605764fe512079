//! Error type for server start-up.

use axum::http::header::InvalidHeaderValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("configuration error: {0}")]
  Config(#[from] config::ConfigError),

  #[error("invalid allowed origin: {0}")]
  InvalidOrigin(#[from] InvalidHeaderValue),
}
