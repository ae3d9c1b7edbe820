use rand::Rng;

use crate::error::MarkovError;
use super::generator::{Generation, generate};
use super::order::Order;
use super::transition_table::TransitionTable;

pub const DEFAULT_ORDER: usize = 5;
pub const DEFAULT_ITERATIONS: usize = 500;
pub const DEFAULT_START_TEXT: &str = "This beautiful morning will";

/// Parameters of one build-then-generate run.
///
/// A request is a plain value: callers build one per invocation and pass it
/// down explicitly. Nothing in the pipeline reads configuration from
/// anywhere else, so concurrent runs never see each other's parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
	order: Order,
	iterations: usize,
	start_text: String,
}

impl GenerationRequest {
	pub fn new(order: Order, iterations: usize, start_text: impl Into<String>) -> Self {
		Self { order, iterations, start_text: start_text.into() }
	}

	/// Validates raw (possibly negative) parameters coming from a user.
	///
	/// # Errors
	/// - [`MarkovError::InvalidOrder`] if `order <= 0`.
	/// - [`MarkovError::NegativeIterations`] if `iterations < 0`.
	pub fn from_raw(order: i64, iterations: i64, start_text: impl Into<String>) -> Result<Self, MarkovError> {
		let order = Order::try_from(order)?;
		let iterations = usize::try_from(iterations).map_err(|_| MarkovError::NegativeIterations(iterations))?;
		Ok(Self::new(order, iterations, start_text))
	}

	pub fn order(&self) -> Order {
		self.order
	}

	pub fn iterations(&self) -> usize {
		self.iterations
	}

	pub fn start_text(&self) -> &str {
		&self.start_text
	}

	pub fn with_order(mut self, order: Order) -> Self {
		self.order = order;
		self
	}

	pub fn with_iterations(mut self, iterations: usize) -> Self {
		self.iterations = iterations;
		self
	}

	pub fn with_start_text(mut self, start_text: impl Into<String>) -> Self {
		self.start_text = start_text.into();
		self
	}

	/// Builds the model of `corpus` and generates from it.
	pub fn run(&self, corpus: &str) -> Generation {
		self.run_with(corpus, &mut rand::rng())
	}

	pub fn run_with<R: Rng + ?Sized>(&self, corpus: &str, rng: &mut R) -> Generation {
		let table = TransitionTable::build(corpus, self.order);
		generate(&self.start_text, self.iterations, &table, rng)
	}
}

impl Default for GenerationRequest {
	fn default() -> Self {
		Self {
			order: Order::DEFAULT,
			iterations: DEFAULT_ITERATIONS,
			start_text: DEFAULT_START_TEXT.to_owned(),
		}
	}
}
