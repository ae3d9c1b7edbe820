use std::fmt;
use std::num::NonZeroUsize;

use crate::error::MarkovError;
use super::request::DEFAULT_ORDER;

/// Context length `k` of a Markov chain.
///
/// # Invariants
/// - `k >= 1`; a zero or negative order is rejected on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Order(NonZeroUsize);

impl Order {
	pub const DEFAULT: Order = match NonZeroUsize::new(DEFAULT_ORDER) {
		Some(k) => Order(k),
		None => panic!("DEFAULT_ORDER must be non-zero"),
	};

	/// # Errors
	/// Returns [`MarkovError::InvalidOrder`] if `k == 0`.
	pub fn new(k: usize) -> Result<Self, MarkovError> {
		NonZeroUsize::new(k)
			.map(Self)
			.ok_or(MarkovError::InvalidOrder(0))
	}

	pub fn get(self) -> usize {
		self.0.get()
	}
}

impl TryFrom<i64> for Order {
	type Error = MarkovError;

	fn try_from(k: i64) -> Result<Self, Self::Error> {
		usize::try_from(k)
			.ok()
			.and_then(NonZeroUsize::new)
			.map(Self)
			.ok_or(MarkovError::InvalidOrder(k))
	}
}

impl fmt::Display for Order {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
