//! In-memory backend for the Reel movie catalogue.
//!
//! The collection is seeded once from a JSON file and lives only as long as
//! the process. Nothing is ever written back.

mod seed;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use seed::parse_seed;
pub use store::MemoryStore;

#[cfg(test)]
mod tests;
