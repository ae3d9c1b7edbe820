//! Top-level module for the character-level Markov chain.
//!
//! This module provides:
//! - The context length of a chain (`Order`)
//! - Duplicate-preserving follower lists (`Occurrences`)
//! - The statistical model built from a corpus (`TransitionTable`)
//! - The randomized walk producing new text (`Generator`)
//! - Per-invocation parameters (`GenerationRequest`)

/// Randomized walk over a transition table.
///
/// Extends a start text one sampled code point at a time until the
/// iteration budget is used or a context has no recorded continuation.
pub mod generator;

/// Followers observed after one context, duplicates included.
pub mod occurrences;

/// Validated context length (`k >= 1`).
pub mod order;

/// Immutable parameters of one build-then-generate run, with defaults.
pub mod request;

/// Mapping from every observed context to its occurrences.
pub mod transition_table;

pub use generator::{Generation, Generator, StopReason, generate};
pub use occurrences::Occurrences;
pub use order::Order;
pub use request::{DEFAULT_ITERATIONS, DEFAULT_ORDER, DEFAULT_START_TEXT, GenerationRequest};
pub use transition_table::TransitionTable;
