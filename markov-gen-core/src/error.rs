use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the boundary of the generation pipeline.
///
/// Degenerate inputs (corpus shorter than the order, start text shorter than
/// the order, a dead-end context) are not errors and never produce one.
#[derive(Debug, Error)]
pub enum MarkovError {
	#[error("order must be a positive integer, got {0}")]
	InvalidOrder(i64),

	#[error("iteration budget must not be negative, got {0}")]
	NegativeIterations(i64),

	#[error("unknown author: {0}")]
	UnknownAuthor(String),

	#[error("failed to read corpus {}: {source}", .path.display())]
	CorpusUnreadable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl MarkovError {
	/// `true` when the error means "no corpus for this request"
	/// rather than a rejected parameter.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::UnknownAuthor(_) | Self::CorpusUnreadable { .. })
	}
}
