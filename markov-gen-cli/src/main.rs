use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use markov_gen_core::corpus::{Author, CorpusLibrary, SAMPLE_TEXT};
use markov_gen_core::io::read_text;
use markov_gen_core::model::{
	DEFAULT_ITERATIONS, DEFAULT_ORDER, DEFAULT_START_TEXT, GenerationRequest, Generator, TransitionTable,
};

const DEFAULT_SAMPLE_PATH: &str = "data/sample.txt";

/// Generates text from a character-level Markov chain.
#[derive(Parser, Debug)]
#[command(name = "markov-gen", version)]
struct Cli {
	/// [o]rder: the number of past characters the next character depends on.
	#[arg(short, long, default_value_t = DEFAULT_ORDER as i64, allow_negative_numbers = true)]
	order: i64,

	/// [i]terations: how many characters to append to the start text.
	#[arg(short, long, default_value_t = DEFAULT_ITERATIONS as i64, allow_negative_numbers = true)]
	iterations: i64,

	/// Corpus file to learn from.
	#[arg(short, long, env = "MARKOV_CORPUS", conflicts_with = "author")]
	corpus: Option<PathBuf>,

	/// Learn from an author's book inside the data directory.
	#[arg(short, long)]
	author: Option<String>,

	/// Folder holding the authors' books.
	#[arg(long, env = "MARKOV_DATA_DIR", default_value = "data")]
	data_dir: PathBuf,

	/// Seed for reproducible output.
	#[arg(long)]
	seed: Option<u64>,

	/// Start text; words are joined with single spaces.
	#[arg(trailing_var_arg = true, allow_hyphen_values = true)]
	start: Vec<String>,
}

impl Cli {
	fn start_text(&self) -> String {
		if self.start.is_empty() {
			DEFAULT_START_TEXT.to_owned()
		} else {
			self.start.join(" ")
		}
	}

	/// Reads the corpus named on the command line.
	///
	/// Falls back to `data/sample.txt`, then to the built-in sample.
	fn load_corpus(&self) -> Result<String> {
		if let Some(path) = &self.corpus {
			return read_text(path).with_context(|| format!("cannot load corpus {}", path.display()));
		}

		if let Some(name) = &self.author {
			let author: Author = name.parse()?;
			let library = CorpusLibrary::new(&self.data_dir);
			return library
				.load(author)
				.with_context(|| format!("cannot load the book of {author}"));
		}

		let sample = Path::new(DEFAULT_SAMPLE_PATH);
		if sample.is_file() {
			return read_text(sample).with_context(|| format!("cannot load corpus {}", sample.display()));
		}

		warn!("{DEFAULT_SAMPLE_PATH} not found, using the built-in sample text");
		Ok(SAMPLE_TEXT.to_owned())
	}
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

	let cli = Cli::parse();
	let request = GenerationRequest::from_raw(cli.order, cli.iterations, cli.start_text())?;
	let corpus = cli.load_corpus()?;

	let table = TransitionTable::build(&corpus, request.order());
	debug!(
		"built {} contexts of order {} from {} characters",
		table.len(),
		request.order(),
		corpus.chars().count()
	);

	let generator = Generator::new(&table);
	let generation = match cli.seed {
		Some(seed) => generator.generate_with(request.start_text(), request.iterations(), &mut StdRng::seed_from_u64(seed)),
		None => generator.generate(request.start_text(), request.iterations()),
	};
	info!("appended {} characters ({:?})", generation.appended(), generation.stop());

	println!("{}", generation.text());
	Ok(())
}
