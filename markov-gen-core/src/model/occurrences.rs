use rand::Rng;

/// Every character observed right after one context, in corpus order.
///
/// Conceptually, this is the set of outgoing edges of a node in a Markov
/// chain. Duplicates are the weights: a context followed by `'a'` three times
/// and `'b'` once keeps `['a', 'a', 'a', 'b']`, and uniform sampling over the
/// entries picks `'a'` three times out of four. Collapsing the list into a
/// set would flatten the distribution, so entries are never deduplicated.
///
/// ## Invariants
/// - The list is never empty: it is created from its first observation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occurrences {
	followers: Vec<char>,
}

impl Occurrences {
	pub(crate) fn new(first: char) -> Self {
		Self { followers: vec![first] }
	}

	/// Records one more observation of `next`.
	pub(crate) fn push(&mut self, next: char) {
		self.followers.push(next);
	}

	/// Number of observations, duplicates included. Always `>= 1`.
	pub fn total(&self) -> usize {
		self.followers.len()
	}

	/// Number of times `c` was observed.
	pub fn count(&self, c: char) -> usize {
		self.followers.iter().filter(|&&f| f == c).count()
	}

	pub fn as_slice(&self) -> &[char] {
		&self.followers
	}

	/// Picks one entry uniformly at random.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
		self.followers[rng.random_range(0..self.followers.len())]
	}
}
