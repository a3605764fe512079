//! Movie records — the only entity in the catalogue.
//!
//! A [`Movie`] is a server-assigned [`MovieId`] plus the descriptive fields in
//! [`NewMovie`]. Partial updates travel as a [`MoviePatch`] and are merged
//! shallowly onto an existing record.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

// ─── Identity ────────────────────────────────────────────────────────────────

/// Opaque record identifier.
///
/// Seeded records may carry any string; records created through the API get a
/// UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
  /// A fresh random identifier.
  pub fn generate() -> Self { Self(Uuid::new_v4().to_string()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl From<String> for MovieId {
  fn from(s: String) -> Self { Self(s) }
}

impl From<&str> for MovieId {
  fn from(s: &str) -> Self { Self(s.to_owned()) }
}

impl fmt::Display for MovieId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Genre ───────────────────────────────────────────────────────────────────

/// A genre tag on a movie.
///
/// Requests may only use the eight canonical genres (the schema enforces
/// this). Seed files are trusted, so any other text they carry is kept
/// verbatim as [`Genre::Other`] and served back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Genre {
  Action,
  SciFi,
  Drama,
  Crime,
  Adventure,
  Romance,
  Animation,
  Biography,
  /// Non-canonical text from the seed, including differently-cased names.
  Other(String),
}

impl Genre {
  pub const ALL: [Genre; 8] = [
    Genre::Action,
    Genre::SciFi,
    Genre::Drama,
    Genre::Crime,
    Genre::Adventure,
    Genre::Romance,
    Genre::Animation,
    Genre::Biography,
  ];

  pub fn as_str(&self) -> &str {
    match self {
      Genre::Action => "Action",
      Genre::SciFi => "Sci-fi",
      Genre::Drama => "Drama",
      Genre::Crime => "Crime",
      Genre::Adventure => "Adventure",
      Genre::Romance => "Romance",
      Genre::Animation => "Animation",
      Genre::Biography => "Biography",
      Genre::Other(s) => s,
    }
  }

  /// Exact, case-sensitive lookup of a canonical name.
  pub fn from_canonical(s: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|g| g.as_str() == s)
  }

  /// The canonical names, in declaration order.
  pub fn canonical_names() -> Vec<String> {
    Self::ALL.iter().map(|g| g.as_str().to_owned()).collect()
  }
}

impl From<String> for Genre {
  fn from(s: String) -> Self { Self::from_canonical(&s).unwrap_or(Genre::Other(s)) }
}

impl From<Genre> for String {
  fn from(g: Genre) -> Self {
    match g {
      Genre::Other(s) => s,
      known => known.as_str().to_owned(),
    }
  }
}

impl fmt::Display for Genre {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// Every field of a movie except its identifier. Produced by
/// [`validate_full`](crate::schema::validate_full).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
  pub title:    String,
  pub year:     i32,
  pub director: String,
  /// Running time in minutes. Kept as the JSON number the client sent, so
  /// `100` is served back as `100` rather than `100.0`.
  pub duration: Number,
  pub poster:   String,
  pub genre:    Vec<Genre>,
  pub rate:     Number,
}

/// A stored movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
  pub id:      MovieId,
  #[serde(flatten)]
  pub details: NewMovie,
}

impl Movie {
  pub fn new(id: MovieId, details: NewMovie) -> Self { Self { id, details } }

  /// Case-insensitive genre membership test used by the list filter.
  pub fn has_genre(&self, name: &str) -> bool {
    self
      .details
      .genre
      .iter()
      .any(|g| g.as_str().eq_ignore_ascii_case(name))
  }

  /// Shallow merge: every field present in `patch` overwrites the stored
  /// value, everything else is retained. The id never changes.
  pub fn apply(&mut self, patch: MoviePatch) {
    let d = &mut self.details;
    if let Some(title) = patch.title {
      d.title = title;
    }
    if let Some(year) = patch.year {
      d.year = year;
    }
    if let Some(director) = patch.director {
      d.director = director;
    }
    if let Some(duration) = patch.duration {
      d.duration = duration;
    }
    if let Some(poster) = patch.poster {
      d.poster = poster;
    }
    if let Some(genre) = patch.genre {
      d.genre = genre;
    }
    if let Some(rate) = patch.rate {
      d.rate = rate;
    }
  }
}

/// A validated partial record. Produced by
/// [`validate_partial`](crate::schema::validate_partial).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoviePatch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title:    Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub year:     Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub director: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub duration: Option<Number>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub poster:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub genre:    Option<Vec<Genre>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rate:     Option<Number>,
}

impl MoviePatch {
  pub fn is_empty(&self) -> bool { *self == Self::default() }

  /// Promote a patch to a complete record when every field is present.
  pub fn into_complete(self) -> Option<NewMovie> {
    Some(NewMovie {
      title:    self.title?,
      year:     self.year?,
      director: self.director?,
      duration: self.duration?,
      poster:   self.poster?,
      genre:    self.genre?,
      rate:     self.rate?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Movie {
    Movie::new(MovieId::from("1"), NewMovie {
      title:    "Heat".into(),
      year:     1995,
      director: "Michael Mann".into(),
      duration: Number::from(170),
      poster:   "https://example.com/heat.jpg".into(),
      genre:    vec![Genre::Crime, Genre::Drama],
      rate:     Number::from_f64(8.3).unwrap(),
    })
  }

  #[test]
  fn genre_canonical_lookup_is_strict() {
    assert_eq!(Genre::from_canonical("Sci-fi"), Some(Genre::SciFi));
    assert_eq!(Genre::from_canonical("sci-fi"), None);
    assert_eq!(Genre::canonical_names()[1], "Sci-fi");
  }

  #[test]
  fn movie_serialises_flat_with_id_first() {
    let json = serde_json::to_string(&sample()).unwrap();
    assert!(json.starts_with(r#"{"id":"1","title":"Heat""#), "{json}");
    assert!(json.contains(r#""genre":["Crime","Drama"]"#), "{json}");
  }

  #[test]
  fn integral_numbers_keep_their_spelling() {
    let json = serde_json::to_string(&sample()).unwrap();
    assert!(json.contains(r#""duration":170,"#), "{json}");
    assert!(json.contains(r#""rate":8.3}"#), "{json}");
  }

  #[test]
  fn seed_genres_are_kept_verbatim() {
    let movie: Movie = serde_json::from_str(
      r#"{"id":"x","title":"T","year":2000,"director":"D","duration":90,
          "poster":"https://a.b/c.png","genre":["drama","Sci-fi","Fantasy"],"rate":5}"#,
    )
    .unwrap();
    assert_eq!(movie.details.genre, vec![
      Genre::Other("drama".into()),
      Genre::SciFi,
      Genre::Other("Fantasy".into()),
    ]);

    let back = serde_json::to_value(&movie).unwrap();
    assert_eq!(back["genre"], serde_json::json!(["drama", "Sci-fi", "Fantasy"]));
    assert_eq!(back["duration"], serde_json::json!(90));
  }

  #[test]
  fn has_genre_ignores_case_on_both_sides() {
    let mut movie = sample();
    movie.details.genre.push(Genre::Other("fantasy".into()));
    assert!(movie.has_genre("DRAMA"));
    assert!(movie.has_genre("Fantasy"));
    assert!(!movie.has_genre("Action"));
  }

  #[test]
  fn apply_overwrites_only_present_fields() {
    let rate = Number::from_f64(9.5).unwrap();
    let mut movie = sample();
    movie.apply(MoviePatch { rate: Some(rate.clone()), ..Default::default() });

    let mut expected = sample();
    expected.details.rate = rate;
    assert_eq!(movie, expected);
  }

  #[test]
  fn into_complete_requires_every_field() {
    assert!(MoviePatch { title: Some("x".into()), ..Default::default() }
      .into_complete()
      .is_none());
    assert!(MoviePatch::default().is_empty());
  }

  #[test]
  fn generated_ids_differ() {
    assert_ne!(MovieId::generate(), MovieId::generate());
  }
}
