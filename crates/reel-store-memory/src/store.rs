//! [`MemoryStore`] — the in-process implementation of [`MovieStore`].

use std::{path::Path, sync::Arc};

use reel_core::{
  movie::{Movie, MovieId, MoviePatch},
  store::MovieStore,
};
use tokio::sync::RwLock;

use crate::{Error, Result, seed};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A movie collection held in process memory.
///
/// Cloning is cheap — clones share the same collection. Writers take the
/// lock for their whole scan-then-mutate sequence, so concurrent creates and
/// updates are serialised.
#[derive(Clone, Default)]
pub struct MemoryStore {
  movies: Arc<RwLock<Vec<Movie>>>,
}

impl MemoryStore {
  /// An empty store — useful for testing.
  pub fn new() -> Self { Self::default() }

  /// A store pre-populated with `movies`, in order.
  pub fn with_movies(movies: Vec<Movie>) -> Result<Self> {
    seed::ensure_unique(&movies)?;
    Ok(Self { movies: Arc::new(RwLock::new(movies)) })
  }

  /// Read and decode the JSON seed file at `path`.
  pub async fn open_seed(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|source| Error::SeedRead {
      path: path.to_path_buf(),
      source,
    })?;
    let movies = seed::parse_seed(&bytes)?;
    tracing::info!(count = movies.len(), path = %path.display(), "loaded movie seed");
    Ok(Self { movies: Arc::new(RwLock::new(movies)) })
  }

  pub async fn len(&self) -> usize { self.movies.read().await.len() }

  pub async fn is_empty(&self) -> bool { self.movies.read().await.is_empty() }
}

// ─── Trait impl ──────────────────────────────────────────────────────────────

impl MovieStore for MemoryStore {
  type Error = Error;

  async fn list(&self) -> Result<Vec<Movie>> { Ok(self.movies.read().await.clone()) }

  async fn find(&self, id: &MovieId) -> Result<Option<Movie>> {
    let movies = self.movies.read().await;
    Ok(movies.iter().find(|m| m.id == *id).cloned())
  }

  async fn append(&self, movie: Movie) -> Result<Movie> {
    let mut movies = self.movies.write().await;
    if movies.iter().any(|m| m.id == movie.id) {
      return Err(Error::DuplicateId(movie.id));
    }
    movies.push(movie.clone());
    Ok(movie)
  }

  async fn update(&self, id: &MovieId, patch: MoviePatch) -> Result<Option<Movie>> {
    let mut movies = self.movies.write().await;
    let Some(movie) = movies.iter_mut().find(|m| m.id == *id) else {
      return Ok(None);
    };
    movie.apply(patch);
    Ok(Some(movie.clone()))
  }
}
