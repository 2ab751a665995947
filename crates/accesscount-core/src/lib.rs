//! accesscount core: store-agnostic counting primitives.
//!
//! This crate defines the key schema, date bucketing, and pure aggregation
//! shared by the gateway middleware and the report tooling. It intentionally
//! carries no store or runtime dependencies so it can be reused in multiple
//! contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `AccessCountError`/`Result` so request
//! serving never crashes on malformed counter data.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod date;
pub mod error;
pub mod keys;
pub mod tally;

/// Shared result type.
pub use error::{AccessCountError, Result};
