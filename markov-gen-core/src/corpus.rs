use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::MarkovError;
use crate::io::{read_text, text_path};

/// Built-in sample paragraph, used when no corpus file is available.
pub const SAMPLE_TEXT: &str = "Today is a beautiful day.
Tomorrow might be even more beautiful, if the rain stops finally.
Nevermind the hailstorm, it's a wonderful day out nonetheless.
The will of the people is to plant willows and sleep on pillows.
I'm willing to row if marmaids don't follow the boat in the morning sunrise.
I'm cheerful and full of optimism that our ally will arrive in the midday sun.
How about the hermit though, it's always so unpredictable to torment my soul.
";

/// Authors with a known corpus.
///
/// The set is closed: any other name is an [`MarkovError::UnknownAuthor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Author {
	Carroll,
	Forster,
	Shakespeare,
}

impl Author {
	pub const ALL: [Author; 3] = [Author::Carroll, Author::Forster, Author::Shakespeare];

	/// Lowercase name used in routes and on the command line.
	pub fn name(self) -> &'static str {
		match self {
			Author::Carroll => "carroll",
			Author::Forster => "forster",
			Author::Shakespeare => "shakespeare",
		}
	}

	/// File stem of the author's book inside a [`CorpusLibrary`].
	pub fn book(self) -> &'static str {
		match self {
			Author::Carroll => "alice_in_wonderland",
			Author::Forster => "a_room_with_a_view",
			Author::Shakespeare => "the_tragedie_of_macbeth",
		}
	}
}

impl FromStr for Author {
	type Err = MarkovError;

	/// Case-insensitive lookup by name.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lowered = s.to_lowercase();
		Author::ALL
			.into_iter()
			.find(|author| author.name() == lowered)
			.ok_or_else(|| MarkovError::UnknownAuthor(s.to_owned()))
	}
}

impl fmt::Display for Author {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// A folder holding one `<book>.txt` file per [`Author`].
#[derive(Clone, Debug)]
pub struct CorpusLibrary {
	root: PathBuf,
}

impl CorpusLibrary {
	pub fn new<P: AsRef<Path>>(root: P) -> Self {
		Self { root: root.as_ref().to_path_buf() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	pub fn path_for(&self, author: Author) -> PathBuf {
		text_path(&self.root, author.book())
	}

	/// Reads the full corpus of `author`.
	///
	/// # Errors
	/// Returns [`MarkovError::CorpusUnreadable`] if the book file cannot be read.
	pub fn load(&self, author: Author) -> Result<String, MarkovError> {
		read_text(self.path_for(author))
	}

	/// Resolves `name` to an author, then loads its corpus.
	pub fn load_by_name(&self, name: &str) -> Result<String, MarkovError> {
		self.load(name.parse()?)
	}
}
