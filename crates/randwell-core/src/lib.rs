//! randwell core: wire contracts, error surface, and draw semantics.
//!
//! This crate defines the HTTP-facing data shapes and the random/range
//! logic shared by the server and its tests. It intentionally carries no
//! transport or runtime dependencies so it can be reused in multiple
//! contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `RandwellError`/`Result` so the
//! serving process does not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod range;
pub mod source;

/// Shared result type.
pub use error::{RandwellError, Result};
