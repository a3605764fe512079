//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use reel_core::{
  movie::MovieId,
  schema::{FieldIssue, Invalid},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// `GET /movies/{id}` miss. Rendered as `{"message": "Movie not found!"}`.
  #[error("movie not found: {0}")]
  MovieNotFound(MovieId),

  /// Any other miss. Rendered as `{"error": "<message>"}`.
  #[error("not found: {0}")]
  NotFound(String),

  /// A malformed query parameter. Rendered as `{"error": "<message>"}`.
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("payload failed validation ({} issues)", .0.len())]
  Validation(Vec<FieldIssue>),

  /// The request was refused by an extractor before reaching the handler
  /// (unparseable JSON, wrong content type, malformed query string).
  #[error("rejected: {message}")]
  Rejected { status: StatusCode, message: String },

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<Invalid> for ApiError {
  fn from(invalid: Invalid) -> Self { ApiError::Validation(invalid.into_issues()) }
}

impl From<JsonRejection> for ApiError {
  fn from(r: JsonRejection) -> Self {
    ApiError::Rejected { status: r.status(), message: r.body_text() }
  }
}

impl From<QueryRejection> for ApiError {
  fn from(r: QueryRejection) -> Self {
    ApiError::Rejected { status: r.status(), message: r.body_text() }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::MovieNotFound(_) => {
        (StatusCode::NOT_FOUND, Json(json!({ "message": "Movie not found!" })))
          .into_response()
      }
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, Json(json!({ "error": m }))).into_response()
      }
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": m }))).into_response()
      }
      ApiError::Validation(issues) => {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "error": issues })))
          .into_response()
      }
      ApiError::Rejected { status, message } => {
        (status, Json(json!({ "error": message }))).into_response()
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": e.to_string() })))
          .into_response()
      }
    }
  }
}
