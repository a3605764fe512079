//! Error type for `reel-store-memory`.

use std::path::PathBuf;

use reel_core::movie::MovieId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to read seed file {path:?}: {source}")]
  SeedRead {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("seed is not a valid movie list: {0}")]
  SeedParse(#[from] serde_json::Error),

  /// Appending (or seeding) a record whose id is already taken.
  #[error("duplicate movie id: {0}")]
  DuplicateId(MovieId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
