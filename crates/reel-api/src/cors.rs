//! Advisory cross-origin headers.
//!
//! This is not access control: a request from an origin outside the
//! allow-list is still served, it just gets no `Access-Control-Allow-Origin`
//! header back.

use axum::http::{
  HeaderMap, HeaderValue,
  header::{self, InvalidHeaderValue},
};

/// Origins allowed when none are configured.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] =
  ["http://localhost:1234", "http://localhost:8080"];

/// Methods advertised by the preflight response.
pub const ALLOWED_METHODS: &str = "GET, POST, PATCH, DELETE";

/// The fixed set of origins that receive an `Access-Control-Allow-Origin`
/// echo.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
  allowed: Vec<HeaderValue>,
}

impl CorsPolicy {
  pub fn new<I>(origins: I) -> Result<Self, InvalidHeaderValue>
  where
    I: IntoIterator,
    I::Item: AsRef<str>,
  {
    let allowed = origins
      .into_iter()
      .map(|o| HeaderValue::from_str(o.as_ref()))
      .collect::<Result<_, _>>()?;
    Ok(Self { allowed })
  }

  /// The request's `Origin`, if it is on the allow-list.
  pub fn permitted_origin(&self, request: &HeaderMap) -> Option<HeaderValue> {
    let origin = request.get(header::ORIGIN)?;
    self.allowed.iter().any(|a| a == origin).then(|| origin.clone())
  }

  /// Response headers advertising the request's origin, empty when the
  /// origin is absent or not allowed.
  pub fn advise(&self, request: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(origin) = self.permitted_origin(request) {
      headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    }
    headers
  }
}

impl Default for CorsPolicy {
  fn default() -> Self {
    Self {
      allowed: DEFAULT_ALLOWED_ORIGINS
        .into_iter()
        .map(HeaderValue::from_static)
        .collect(),
    }
  }
}
