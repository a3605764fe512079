//! The `MovieStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `reel-store-memory`).
//! The HTTP layer (`reel-api`) depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::movie::{Movie, MovieId, MoviePatch};

/// Abstraction over the movie collection.
///
/// The collection is ordered: [`list`](Self::list) returns records in
/// insertion order and [`append`](Self::append) adds at the end.
/// Implementations must make `append` and `update` atomic with respect to
/// each other, so a scan-then-mutate sequence never interleaves with another
/// writer.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait MovieStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every record, in collection order.
  fn list(&self) -> impl Future<Output = Result<Vec<Movie>, Self::Error>> + Send + '_;

  /// Retrieve a record by id. Returns `None` if not found.
  fn find<'a>(
    &'a self,
    id: &'a MovieId,
  ) -> impl Future<Output = Result<Option<Movie>, Self::Error>> + Send + 'a;

  /// Add a record to the end of the collection.
  ///
  /// Returns an error if a record with the same id already exists.
  fn append(&self, movie: Movie) -> impl Future<Output = Result<Movie, Self::Error>> + Send + '_;

  /// Shallow-merge `patch` onto the record with `id` and replace it in place.
  ///
  /// Returns the merged record, or `None` if no record has that id (in which
  /// case nothing is mutated).
  fn update<'a>(
    &'a self,
    id: &'a MovieId,
    patch: MoviePatch,
  ) -> impl Future<Output = Result<Option<Movie>, Self::Error>> + Send + 'a;
}
