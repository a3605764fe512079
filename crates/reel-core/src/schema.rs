//! Declarative validation schema for movie payloads.
//!
//! The schema is a static table of `(field, rule)` pairs. [`validate_full`]
//! and [`validate_partial`] walk the same table; the only difference is
//! whether a missing field is reported. Unknown keys (including `id`) are
//! dropped from the validated output.
//!
//! Validation never fails with an `Err` of its own: a malformed candidate is
//! simply an [`Invalid`] value carrying one or more [`FieldIssue`]s.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::movie::{Genre, MoviePatch, NewMovie};

// ─── Issues ──────────────────────────────────────────────────────────────────

/// Which constraint a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
  Required,
  InvalidType,
  NotInteger,
  TooSmall,
  TooBig,
  InvalidUrl,
  InvalidEnumValue,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldIssue {
  /// Dotted path to the offending value, e.g. `genre.1`. Empty when the
  /// candidate itself is malformed.
  pub field:   String,
  pub message: String,
  pub code:    IssueCode,
}

impl FieldIssue {
  fn new(field: impl Into<String>, code: IssueCode, message: impl Into<String>) -> Self {
    Self { field: field.into(), message: message.into(), code }
  }
}

/// The failure side of a validation result.
#[derive(Debug, Clone, PartialEq)]
pub struct Invalid(pub Vec<FieldIssue>);

impl Invalid {
  pub fn issues(&self) -> &[FieldIssue] { &self.0 }

  pub fn into_issues(self) -> Vec<FieldIssue> { self.0 }
}

// ─── Rule table ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Rule {
  Text { non_empty: bool },
  Integer { min: i64, max: i64 },
  Number { min: Bound, max: Option<f64> },
  Url,
  GenreList,
}

#[derive(Debug, Clone, Copy)]
enum Bound {
  Inclusive(f64),
  Exclusive(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
  Full,
  Partial,
}

const MOVIE_SCHEMA: &[(&str, Rule)] = &[
  ("title", Rule::Text { non_empty: true }),
  ("year", Rule::Integer { min: 1900, max: 2024 }),
  ("director", Rule::Text { non_empty: false }),
  ("duration", Rule::Number { min: Bound::Exclusive(0.0), max: None }),
  ("poster", Rule::Url),
  ("genre", Rule::GenreList),
  ("rate", Rule::Number { min: Bound::Inclusive(0.0), max: Some(10.0) }),
];

// ─── Entry points ────────────────────────────────────────────────────────────

/// Validate a complete movie payload. Every field is required.
pub fn validate_full(candidate: &Value) -> Result<NewMovie, Invalid> {
  let patch = validate(candidate, Mode::Full)?;
  // Full mode has already reported every missing field.
  patch.into_complete().ok_or_else(|| {
    Invalid(vec![FieldIssue::new("", IssueCode::Required, "Incomplete movie")])
  })
}

/// Validate a partial movie payload. Absent fields are not checked and are
/// absent from the returned patch.
pub fn validate_partial(candidate: &Value) -> Result<MoviePatch, Invalid> {
  validate(candidate, Mode::Partial)
}

fn validate(candidate: &Value, mode: Mode) -> Result<MoviePatch, Invalid> {
  let Some(object) = candidate.as_object() else {
    return Err(Invalid(vec![FieldIssue::new(
      "",
      IssueCode::InvalidType,
      format!("Expected object, received {}", type_name(candidate)),
    )]));
  };

  let mut issues = Vec::new();
  let mut accepted = Map::new();

  for &(field, rule) in MOVIE_SCHEMA {
    match object.get(field) {
      None if mode == Mode::Full => issues.push(FieldIssue::new(
        field,
        IssueCode::Required,
        format!("Movie {field} is required"),
      )),
      None => {}
      Some(value) => match check(field, rule, value) {
        Ok(normalised) => {
          accepted.insert(field.to_owned(), normalised);
        }
        Err(mut found) => issues.append(&mut found),
      },
    }
  }

  if !issues.is_empty() {
    return Err(Invalid(issues));
  }

  serde_json::from_value(Value::Object(accepted)).map_err(|e| {
    Invalid(vec![FieldIssue::new("", IssueCode::InvalidType, e.to_string())])
  })
}

// ─── Per-rule checks ─────────────────────────────────────────────────────────

/// Check one value against its rule, returning the normalised value to keep.
fn check(field: &str, rule: Rule, value: &Value) -> Result<Value, Vec<FieldIssue>> {
  let one = |code: IssueCode, message: String| vec![FieldIssue::new(field, code, message)];
  let wrong_type = |expected: &str| {
    one(
      IssueCode::InvalidType,
      format!("Movie {field} must be a {expected}, received {}", type_name(value)),
    )
  };

  match rule {
    Rule::Text { non_empty } => {
      let s = value.as_str().ok_or_else(|| wrong_type("string"))?;
      if non_empty && s.is_empty() {
        return Err(one(IssueCode::TooSmall, format!("Movie {field} must not be empty")));
      }
      Ok(value.clone())
    }

    Rule::Integer { min, max } => {
      let n = value.as_f64().ok_or_else(|| wrong_type("number"))?;
      if n.fract() != 0.0 {
        return Err(one(IssueCode::NotInteger, format!("Movie {field} must be an integer")));
      }
      if n < min as f64 {
        return Err(one(
          IssueCode::TooSmall,
          format!("Movie {field} must be greater than or equal to {min}"),
        ));
      }
      if n > max as f64 {
        return Err(one(
          IssueCode::TooBig,
          format!("Movie {field} must be less than or equal to {max}"),
        ));
      }
      // Store `2020.0` as `2020` so it deserialises into an integer field.
      Ok(Value::from(n as i64))
    }

    Rule::Number { min, max } => {
      let n = value.as_f64().ok_or_else(|| wrong_type("number"))?;
      match min {
        Bound::Inclusive(lo) if n < lo => {
          return Err(one(
            IssueCode::TooSmall,
            format!("Movie {field} must be greater than or equal to {lo}"),
          ));
        }
        Bound::Exclusive(lo) if n <= lo => {
          return Err(one(
            IssueCode::TooSmall,
            format!("Movie {field} must be greater than {lo}"),
          ));
        }
        _ => {}
      }
      if let Some(hi) = max
        && n > hi
      {
        return Err(one(
          IssueCode::TooBig,
          format!("Movie {field} must be less than or equal to {hi}"),
        ));
      }
      Ok(value.clone())
    }

    Rule::Url => {
      let s = value.as_str().ok_or_else(|| wrong_type("string"))?;
      if Url::parse(s).is_err() {
        return Err(one(IssueCode::InvalidUrl, "Poster must be a valid URL".to_owned()));
      }
      Ok(value.clone())
    }

    Rule::GenreList => {
      let items = value.as_array().ok_or_else(|| wrong_type("array"))?;
      let issues: Vec<FieldIssue> = items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| genre_issue(field, i, item))
        .collect();
      if issues.is_empty() { Ok(value.clone()) } else { Err(issues) }
    }
  }
}

fn genre_issue(field: &str, index: usize, item: &Value) -> Option<FieldIssue> {
  let path = format!("{field}.{index}");
  match item.as_str() {
    Some(s) if Genre::from_canonical(s).is_some() => None,
    Some(s) => {
      Some(FieldIssue::new(
        path,
        IssueCode::InvalidEnumValue,
        format!(
          "Invalid genre '{s}'. Expected one of: {}",
          Genre::canonical_names().join(", ")
        ),
      ))
    }
    None => Some(FieldIssue::new(
      path,
      IssueCode::InvalidType,
      format!("Genre must be a string, received {}", type_name(item)),
    )),
  }
}

fn type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}
