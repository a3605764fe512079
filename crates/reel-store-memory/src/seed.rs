//! Seed-file decoding.

use std::collections::HashSet;

use reel_core::movie::Movie;

use crate::{Error, Result};

/// Decode a JSON array of movie records and check that ids are unique.
///
/// Seed records are trusted and are not run through the request schema.
/// Genre text outside the canonical set is kept exactly as written.
pub fn parse_seed(bytes: &[u8]) -> Result<Vec<Movie>> {
  let movies: Vec<Movie> = serde_json::from_slice(bytes)?;
  ensure_unique(&movies)?;
  Ok(movies)
}

pub(crate) fn ensure_unique(movies: &[Movie]) -> Result<()> {
  let mut seen = HashSet::with_capacity(movies.len());
  for movie in movies {
    if !seen.insert(&movie.id) {
      return Err(Error::DuplicateId(movie.id.clone()));
    }
  }
  Ok(())
}
