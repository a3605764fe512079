//! Handlers for `/movies` endpoints.
//!
//! | Method    | Path           | Notes |
//! |-----------|----------------|-------|
//! | `GET`     | `/movies`      | Optional `?total=N` (takes precedence) or `?genre=G` |
//! | `GET`     | `/movies/:id`  | 404 `{"message":"Movie not found!"}` if absent |
//! | `POST`    | `/movies`      | Full movie body; returns 201 + stored record |
//! | `PATCH`   | `/movies/:id`  | Partial movie body; returns merged record |
//! | `OPTIONS` | `/movies/:id`  | Advisory CORS preflight; 204 |

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
  http::{HeaderMap, HeaderValue, StatusCode, header},
  response::IntoResponse,
};
use reel_core::{
  movie::{Movie, MovieId},
  schema::{validate_full, validate_partial},
  store::MovieStore,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{ApiState, cors::ALLOWED_METHODS, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  /// Return only the first `total` records, in collection order. An empty
  /// value (`?total=`) counts as absent.
  pub total: Option<String>,
  /// Return only records tagged with this genre (case-insensitive).
  pub genre: Option<String>,
}

impl ListParams {
  /// The parsed `total`, or `None` when it is missing or empty.
  fn limit(&self) -> Result<Option<usize>, ApiError> {
    match self.total.as_deref() {
      None | Some("") => Ok(None),
      Some(raw) => raw.parse().map(Some).map_err(|_| {
        ApiError::BadRequest(format!(
          "total must be a non-negative integer, received {raw:?}"
        ))
      }),
    }
  }
}

/// `GET /movies[?total=N][&genre=G]`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
  headers: HeaderMap,
  params: Result<Query<ListParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: MovieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Query(params) = params?;
  let limit = params.limit()?;
  let cors = state.cors.advise(&headers);

  let mut movies = state
    .store
    .list()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  if let Some(total) = limit {
    movies.truncate(total);
  } else if let Some(genre) = params.genre.filter(|g| !g.is_empty()) {
    movies.retain(|m| m.has_genre(&genre));
  }

  Ok((cors, Json(movies)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /movies/:id`
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError>
where
  S: MovieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = MovieId::from(id);
  let movie = state
    .store
    .find(&id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| {
      tracing::debug!(movie_id = %id, "movie lookup missed");
      ApiError::MovieNotFound(id.clone())
    })?;
  Ok(Json(movie))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /movies` — returns 201 + the stored [`Movie`] with its new id.
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: MovieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Json(body) = payload?;
  let details = validate_full(&body).inspect_err(|invalid| {
    tracing::debug!(issues = invalid.issues().len(), "rejected movie create");
  })?;

  let movie = state
    .store
    .append(Movie::new(MovieId::generate(), details))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  tracing::info!(movie_id = %movie.id, title = %movie.details.title, "created movie");
  Ok((StatusCode::CREATED, Json(movie)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /movies/:id` — body is any subset of the movie fields.
///
/// The body is validated before the id is looked up, so an invalid body is
/// a 422 even when the id does not exist.
pub async fn update<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
  payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Movie>, ApiError>
where
  S: MovieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Json(body) = payload?;
  let patch = validate_partial(&body).inspect_err(|invalid| {
    tracing::debug!(issues = invalid.issues().len(), "rejected movie update");
  })?;

  let id = MovieId::from(id);
  let movie = state
    .store
    .update(&id, patch)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("Movie not found".to_owned()))?;

  tracing::info!(movie_id = %movie.id, "updated movie");
  Ok(Json(movie))
}

// ─── Preflight ────────────────────────────────────────────────────────────────

/// `OPTIONS /movies/:id`
pub async fn preflight<S>(
  State(state): State<ApiState<S>>,
  headers: HeaderMap,
) -> impl IntoResponse
where
  S: MovieStore,
{
  let mut out = state.cors.advise(&headers);
  out.insert(
    header::ACCESS_CONTROL_ALLOW_METHODS,
    HeaderValue::from_static(ALLOWED_METHODS),
  );
  (StatusCode::NO_CONTENT, out)
}
