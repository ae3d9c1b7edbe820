use markov_gen_core::MarkovError;
use markov_gen_core::corpus::SAMPLE_TEXT;
use markov_gen_core::model::{GenerationRequest, Generator, Order, StopReason, TransitionTable, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;

const CORPORA: &[&str] = &[
	SAMPLE_TEXT,
	"abcabcabc",
	"the cat sat on the mat, the cat ate the rat",
	"Ünïcödé ünïcödé ÜNÏCÖDÉ — 日本語のテキスト、日本語の文。",
	"aaaaaaaaab",
];

#[test]
fn every_window_is_recorded() {
	for corpus in CORPORA {
		let chars: Vec<char> = corpus.chars().collect();
		for k in 1..=6 {
			let table = TransitionTable::from_chars(&chars, Order::new(k).unwrap());

			for (context, occurrences) in table.contexts() {
				assert_eq!(context.len(), k);
				assert!(occurrences.total() >= 1);
			}

			let mut windows = 0;
			for i in 0..chars.len().saturating_sub(k) {
				let context = &chars[i..i + k];
				let occurrences = table.get(context).expect("window must be a context");
				assert!(occurrences.as_slice().contains(&chars[i + k]));
				windows += 1;
			}

			let recorded: usize = table.contexts().map(|(_, o)| o.total()).sum();
			assert_eq!(recorded, windows, "corpus {corpus:?}, k = {k}");
		}
	}
}

#[test]
fn sampling_follows_observed_frequencies() {
	// 'a' is followed by 'b' three times and by 'c' once
	let table = TransitionTable::build("abababac", Order::new(1).unwrap());
	let occurrences = table.get(&['a']).unwrap();
	let mut rng = StdRng::seed_from_u64(0x5eed);

	let trials = 20_000;
	let hits = (0..trials).filter(|_| occurrences.sample(&mut rng) == 'b').count();
	let frequency = hits as f64 / trials as f64;

	assert!((frequency - 0.75).abs() < 0.02, "frequency of 'b' was {frequency}");
}

#[test]
fn output_starts_with_start_text() {
	let mut rng = StdRng::seed_from_u64(42);
	for corpus in CORPORA {
		for k in 1..=4 {
			let table = TransitionTable::build(corpus, Order::new(k).unwrap());
			for start in ["", "a", "the", "The will of", "日本語の"] {
				let generation = generate(start, 64, &table, &mut rng);
				assert!(generation.text().starts_with(start));
				assert!(generation.text().chars().count() <= start.chars().count() + 64);
				assert_eq!(generation.text().chars().count(), start.chars().count() + generation.appended());
			}
		}
	}
}

#[test]
fn short_start_is_unchanged() {
	let table = TransitionTable::build(SAMPLE_TEXT, Order::new(5).unwrap());
	for start in ["", "T", "This", "日本語"] {
		for iterations in [0, 1, 500] {
			let generation = Generator::new(&table).generate(start, iterations);
			assert_eq!(generation.text(), start);
			assert_eq!(generation.stop(), StopReason::StartTooShort);
		}
	}
}

#[test]
fn dead_end_returns_less_than_budget() {
	// The corpus ends right after its only "!", so "!" has no continuation
	let table = TransitionTable::build("abc!", Order::new(1).unwrap());
	let iterations = 10;
	let generation = Generator::new(&table).generate("a", iterations);

	assert_eq!(generation.text(), "abc!");
	assert_eq!(generation.stop(), StopReason::DeadEnd);
	assert!(generation.text().chars().count() < 1 + iterations);
}

#[test]
fn budget_far_beyond_corpus_returns_at_dead_end() {
	let table = TransitionTable::build(SAMPLE_TEXT, Order::new(5).unwrap());
	let mut rng = StdRng::seed_from_u64(9);
	// " soul" occurs once, right before the end of the corpus
	let generation = generate("my soul", usize::MAX, &table, &mut rng);

	assert_eq!(generation.text(), "my soul.\n");
	assert_eq!(generation.stop(), StopReason::DeadEnd);

	let request = GenerationRequest::from_raw(2, i64::MAX, "ab").unwrap();
	let generation = request.run_with("abc", &mut rng);
	assert_eq!(generation.text(), "abc");
	assert_eq!(generation.stop(), StopReason::DeadEnd);
}

#[test]
fn single_valued_contexts_are_deterministic() {
	let table = TransitionTable::build("abcabcabc", Order::new(3).unwrap());
	assert_eq!(table.get(&['a', 'b', 'c']).unwrap().as_slice(), &['a', 'a']);
	assert_eq!(table.get(&['b', 'c', 'a']).unwrap().as_slice(), &['b', 'b']);
	assert_eq!(table.get(&['c', 'a', 'b']).unwrap().as_slice(), &['c', 'c']);

	for seed in 0..32 {
		let mut rng = StdRng::seed_from_u64(seed);
		assert_eq!(generate("abc", 5, &table, &mut rng).text(), "abcabcab");
	}
}

#[test]
fn short_corpus_dead_ends_immediately() {
	let table = TransitionTable::build("ab", Order::new(5).unwrap());
	assert!(table.is_empty());

	for start in ["hello", "This beautiful morning will"] {
		let generation = Generator::new(&table).generate(start, 500);
		assert_eq!(generation.text(), start);
		assert_eq!(generation.appended(), 0);
		assert_eq!(generation.stop(), StopReason::DeadEnd);
	}
}

#[test]
fn non_positive_order_is_rejected() {
	assert!(matches!(Order::new(0), Err(MarkovError::InvalidOrder(0))));
	assert!(matches!(Order::try_from(-5i64), Err(MarkovError::InvalidOrder(-5))));
	assert!(GenerationRequest::from_raw(0, 500, "text").is_err());
	assert!(GenerationRequest::from_raw(-1, 500, "text").is_err());
	assert!(GenerationRequest::from_raw(5, -1, "text").is_err());
}

#[test]
fn sample_text_with_defaults_reads_like_the_corpus() {
	let mut rng = StdRng::seed_from_u64(2024);
	let generation = GenerationRequest::default().run_with(SAMPLE_TEXT, &mut rng);

	assert!(generation.text().starts_with("This beautiful morning will"));
	// Every 6-gram of the output after the start text comes from the corpus
	let chars: Vec<char> = generation.text().chars().collect();
	let start_len = "This beautiful morning will".chars().count();
	for window in chars[start_len - 5..].windows(6) {
		let gram: String = window.iter().collect();
		assert!(SAMPLE_TEXT.contains(&gram), "{gram:?} not in corpus");
	}
}
