use rand::Rng;

use super::transition_table::TransitionTable;

/// Why a generation stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
	/// The whole iteration budget was used.
	BudgetExhausted,
	/// The current context was never observed in the corpus.
	DeadEnd,
	/// The start text is shorter than the order; nothing was appended.
	StartTooShort,
}

/// Output of one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
	text: String,
	appended: usize,
	stop: StopReason,
}

impl Generation {
	/// Generated text, starting with the start text.
	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn into_text(self) -> String {
		self.text
	}

	/// Number of code points appended to the start text.
	pub fn appended(&self) -> usize {
		self.appended
	}

	pub fn stop(&self) -> StopReason {
		self.stop
	}
}

/// Randomized walk over a [`TransitionTable`].
///
/// # Responsibilities
/// - Seed the walk with the last `k` code points of a start text
/// - Append one sampled follower per iteration
/// - Stop early on a dead-end context
///
/// The table is only borrowed: any number of generators can walk the same
/// model at once.
#[derive(Clone, Copy, Debug)]
pub struct Generator<'a> {
	table: &'a TransitionTable,
}

impl<'a> Generator<'a> {
	pub fn new(table: &'a TransitionTable) -> Self {
		Self { table }
	}

	/// Same as [`Generator::generate_with`], using the thread-local RNG.
	pub fn generate(&self, start_text: &str, iterations: usize) -> Generation {
		self.generate_with(start_text, iterations, &mut rand::rng())
	}

	/// Extends `start_text` by at most `iterations` code points.
	pub fn generate_with<R: Rng + ?Sized>(&self, start_text: &str, iterations: usize, rng: &mut R) -> Generation {
		generate(start_text, iterations, self.table, rng)
	}
}

/// Extends `start_text` by walking `table`, using its order as `k`.
///
/// # Behavior
/// - If `start_text` has fewer than `k` code points, it is returned
///   unchanged.
/// - Otherwise, up to `iterations` times: look up the last `k` code points of
///   the output, sample one of their occurrences and append it.
/// - An unknown context stops the walk with what was generated so far.
///
/// # Notes
/// - `start_text` is always a prefix of the output.
/// - `rng` is the only source of randomness.
pub fn generate<R: Rng + ?Sized>(
	start_text: &str,
	iterations: usize,
	table: &TransitionTable,
	rng: &mut R,
) -> Generation {
	let k = table.order().get();
	let mut result: Vec<char> = start_text.chars().collect();

	if result.len() < k {
		return Generation {
			text: start_text.to_owned(),
			appended: 0,
			stop: StopReason::StartTooShort,
		};
	}

	let mut appended = 0;
	let mut stop = StopReason::BudgetExhausted;

	for _ in 0..iterations {
		let context = &result[result.len() - k..];
		let next = match table.get(context) {
			Some(occurrences) => occurrences.sample(rng),
			None => {
				stop = StopReason::DeadEnd;
				break;
			}
		};
		result.push(next);
		appended += 1;
	}

	Generation {
		text: result.into_iter().collect(),
		appended,
		stop,
	}
}
