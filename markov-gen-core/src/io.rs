use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MarkovError;

/// Reads a whole text file into memory.
///
/// Unlike a line reader, line breaks are kept: they are corpus characters
/// like any other.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, MarkovError> {
	let path = path.as_ref();
	fs::read_to_string(path).map_err(|source| MarkovError::CorpusUnreadable {
		path: path.to_path_buf(),
		source,
	})
}

/// Builds `<folder>/<stem>.txt`.
///
/// Example:
/// `data` + `"alice_in_wonderland"` → `data/alice_in_wonderland.txt`
pub(crate) fn text_path<P: AsRef<Path>>(folder: P, stem: &str) -> PathBuf {
	let mut output = PathBuf::from(folder.as_ref());
	output.push(stem);
	output.set_extension("txt");
	output
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn keeps_line_breaks() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "first line\r\nsecond line\n").unwrap();
		assert_eq!(read_text(file.path()).unwrap(), "first line\r\nsecond line\n");
	}

	#[test]
	fn missing_file_is_reported_with_its_path() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("nothing.txt");
		match read_text(&missing) {
			Err(MarkovError::CorpusUnreadable { path, .. }) => assert_eq!(path, missing),
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[test]
	fn text_path_appends_extension() {
		assert_eq!(text_path("data", "a_room_with_a_view"), PathBuf::from("data/a_room_with_a_view.txt"));
	}
}
