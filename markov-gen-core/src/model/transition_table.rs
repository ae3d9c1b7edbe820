use std::collections::HashMap;

use super::occurrences::Occurrences;
use super::order::Order;

/// Character-level Markov model of order `k`.
///
/// Maps every context (`k` consecutive code points) observed in a corpus to
/// the [`Occurrences`] of the code point that immediately followed it.
///
/// # Invariants
/// - Every key has exactly `k` code points.
/// - A present key always has at least one occurrence; an absent key was
///   never observed.
/// - The table is immutable once built.
#[derive(Clone, Debug)]
pub struct TransitionTable {
	order: Order,
	contexts: HashMap<Box<[char]>, Occurrences>,
}

impl TransitionTable {
	/// Builds the table of `corpus` for contexts of length `order`.
	///
	/// Code points, not bytes, make up contexts: `"é"` counts as one.
	pub fn build(corpus: &str, order: Order) -> Self {
		let chars: Vec<char> = corpus.chars().collect();
		Self::from_chars(&chars, order)
	}

	/// Builds the table from an already decoded corpus.
	///
	/// # Notes
	/// - A corpus of at most `k` code points gives an empty table.
	/// - The last `k` code points never become a context, since nothing
	///   follows them.
	pub fn from_chars(corpus: &[char], order: Order) -> Self {
		let k = order.get();
		let mut contexts: HashMap<Box<[char]>, Occurrences> = HashMap::new();

		for window in corpus.windows(k + 1) {
			let (context, next) = window.split_at(k);
			let next = next[0];
			// Only unseen contexts allocate a key
			match contexts.get_mut(context) {
				Some(occurrences) => occurrences.push(next),
				None => {
					contexts.insert(context.into(), Occurrences::new(next));
				}
			}
		}

		Self { order, contexts }
	}

	pub fn order(&self) -> Order {
		self.order
	}

	/// Returns the occurrences recorded after `context`, if it was observed.
	pub fn get(&self, context: &[char]) -> Option<&Occurrences> {
		self.contexts.get(context)
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Iterates over `(context, occurrences)` pairs in arbitrary order.
	pub fn contexts(&self) -> impl Iterator<Item = (&[char], &Occurrences)> {
		self.contexts.iter().map(|(context, occurrences)| (&**context, occurrences))
	}
}
