//! Core types and trait definitions for the Reel movie catalogue.
//!
//! This crate is deliberately free of HTTP and I/O dependencies.
//! All other crates depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod movie;
pub mod schema;
pub mod store;
