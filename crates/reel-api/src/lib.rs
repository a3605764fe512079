//! JSON REST API for Reel.
//!
//! Exposes an axum [`Router`] backed by any [`reel_core::store::MovieStore`].
//! TLS, tracing layers and socket binding are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = reel_api::api_router(Arc::new(store), CorsPolicy::default());
//! ```

pub mod cors;
pub mod error;
pub mod movies;

use std::sync::Arc;

use axum::{Router, routing::get};
use reel_core::store::MovieStore;

pub use cors::CorsPolicy;
pub use error::ApiError;

/// Shared state threaded through all handlers.
pub struct ApiState<S> {
  pub store: Arc<S>,
  pub cors:  Arc<CorsPolicy>,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store), cors: Arc::clone(&self.cors) }
  }
}

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>, cors: CorsPolicy) -> Router<()>
where
  S: MovieStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/movies", get(movies::list::<S>).post(movies::create::<S>))
    .route(
      "/movies/{id}",
      get(movies::get_one::<S>)
        .patch(movies::update::<S>)
        .options(movies::preflight::<S>),
    )
    .with_state(ApiState { store, cors: Arc::new(cors) })
}

// ─── Integration tests ────────────────────────────────────────────────────────
