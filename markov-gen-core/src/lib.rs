//! Character-level Markov chain text generation library.
//!
//! This crate provides:
//! - A transition model built from a corpus of Unicode scalar values
//! - Randomized generation weighted by observed frequencies
//! - An explicit, immutable per-run configuration
//! - A small catalogue of author corpora
//!
//! Everything here is synchronous and pure with respect to its arguments:
//! the library never logs and never reads global state.

/// Markov model and generation logic.
pub mod model;

/// Author catalogue and corpus loading.
pub mod corpus;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (whole-file text loading, path helpers).
pub mod io;

pub use error::MarkovError;
