//! Tests for `MemoryStore` and seed decoding.

use reel_core::{
  movie::{Genre, Movie, MovieId, MoviePatch, NewMovie},
  store::MovieStore,
};

use serde_json::Number;

use crate::{Error, MemoryStore, parse_seed};

fn movie(id: &str, title: &str, genre: Vec<Genre>) -> Movie {
  Movie::new(MovieId::from(id), NewMovie {
    title: title.into(),
    year: 2001,
    director: "Someone".into(),
    duration: Number::from(120),
    poster: "https://example.com/poster.jpg".into(),
    genre,
    rate: Number::from(7),
  })
}

fn five() -> Vec<Movie> {
  vec![
    movie("1", "One", vec![Genre::Drama]),
    movie("2", "Two", vec![Genre::Action]),
    movie("3", "Three", vec![Genre::Crime, Genre::Drama]),
    movie("4", "Four", vec![]),
    movie("5", "Five", vec![Genre::Romance]),
  ]
}

// ─── Reads ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_preserves_order() {
  let s = MemoryStore::with_movies(five()).unwrap();
  let titles: Vec<String> = s
    .list()
    .await
    .unwrap()
    .into_iter()
    .map(|m| m.details.title)
    .collect();
  assert_eq!(titles, ["One", "Two", "Three", "Four", "Five"]);
}

#[tokio::test]
async fn find_existing_and_missing() {
  let s = MemoryStore::with_movies(five()).unwrap();
  let found = s.find(&MovieId::from("3")).await.unwrap().unwrap();
  assert_eq!(found.details.title, "Three");
  assert!(s.find(&MovieId::from("nope")).await.unwrap().is_none());
}

// ─── Writes ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn append_adds_to_the_end() {
  let s = MemoryStore::with_movies(five()).unwrap();
  s.append(movie("6", "Six", vec![])).await.unwrap();

  let all = s.list().await.unwrap();
  assert_eq!(all.len(), 6);
  assert_eq!(all.last().unwrap().id, MovieId::from("6"));
}

#[tokio::test]
async fn append_rejects_duplicate_id() {
  let s = MemoryStore::with_movies(five()).unwrap();
  let err = s.append(movie("2", "Again", vec![])).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateId(id) if id.as_str() == "2"));
  assert_eq!(s.len().await, 5);
}

#[tokio::test]
async fn update_merges_in_place() {
  let s = MemoryStore::with_movies(five()).unwrap();
  let id = MovieId::from("2");
  let rate = Number::from_f64(9.5).unwrap();
  let merged = s
    .update(&id, MoviePatch { rate: Some(rate.clone()), ..Default::default() })
    .await
    .unwrap()
    .unwrap();

  let mut expected = movie("2", "Two", vec![Genre::Action]);
  expected.details.rate = rate;
  assert_eq!(merged, expected);
  assert_eq!(s.find(&id).await.unwrap().unwrap(), expected);
  // Position is unchanged.
  assert_eq!(s.list().await.unwrap()[1].id, id);
}

#[tokio::test]
async fn update_missing_mutates_nothing() {
  let s = MemoryStore::with_movies(five()).unwrap();
  let before = s.list().await.unwrap();
  let result = s
    .update(&MovieId::from("missing"), MoviePatch {
      title: Some("X".into()),
      ..Default::default()
    })
    .await
    .unwrap();
  assert!(result.is_none());
  assert_eq!(s.list().await.unwrap(), before);
}

#[tokio::test]
async fn clones_share_the_collection() {
  let a = MemoryStore::new();
  let b = a.clone();
  a.append(movie("x", "Shared", vec![])).await.unwrap();
  assert_eq!(b.len().await, 1);
  assert!(!b.is_empty().await);
}

#[tokio::test]
async fn concurrent_appends_are_all_kept() {
  let s = MemoryStore::new();
  let handles: Vec<_> = (0..32)
    .map(|i| {
      let s = s.clone();
      tokio::spawn(async move {
        s.append(movie(&MovieId::generate().to_string(), &format!("M{i}"), vec![]))
          .await
          .unwrap();
      })
    })
    .collect();
  for h in handles {
    h.await.unwrap();
  }
  assert_eq!(s.len().await, 32);
}

// ─── Seed ────────────────────────────────────────────────────────────────────

#[test]
fn with_movies_rejects_duplicate_ids() {
  let mut movies = five();
  movies.push(movie("1", "Dup", vec![]));
  assert!(matches!(MemoryStore::with_movies(movies), Err(Error::DuplicateId(_))));
}

#[test]
fn parse_seed_keeps_genre_text_verbatim() {
  let movies = parse_seed(
    br#"[{"id":"1","title":"T","year":1994,"director":"D","duration":142,
          "poster":"https://i.example/p.jpg","genre":["drama","CRIME"],"rate":9.3}]"#,
  )
  .unwrap();
  assert_eq!(movies[0].details.genre, vec![
    Genre::Other("drama".into()),
    Genre::Other("CRIME".into()),
  ]);
  assert!(movies[0].has_genre("Crime"));
}

#[tokio::test]
async fn seed_with_unlisted_genre_loads_and_serves_unchanged() {
  let raw = br#"[{"id":"1","title":"T","year":2001,"director":"D","duration":178,
          "poster":"https://i.example/p.jpg","genre":["Action","Fantasy"],"rate":8.8}]"#;
  let s = MemoryStore::with_movies(parse_seed(raw).unwrap()).unwrap();

  let served = serde_json::to_value(s.list().await.unwrap()).unwrap();
  let original: serde_json::Value = serde_json::from_slice(raw).unwrap();
  assert_eq!(served, original);
}

#[test]
fn parse_seed_rejects_garbage() {
  assert!(matches!(parse_seed(b"{\"not\":\"a list\"}"), Err(Error::SeedParse(_))));
}

#[tokio::test]
async fn open_seed_reports_missing_file() {
  let err = MemoryStore::open_seed("/definitely/not/here/movies.json")
    .await
    .err()
    .unwrap();
  assert!(matches!(err, Error::SeedRead { .. }));
}

#[tokio::test]
async fn open_seed_reads_bundled_data() {
  let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/movies.json");
  let s = MemoryStore::open_seed(path).await.unwrap();
  assert!(!s.is_empty().await);
}
