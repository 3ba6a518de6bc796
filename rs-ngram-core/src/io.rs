use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole text file into a `String`.
///
/// Fails if the file cannot be opened or is not valid UTF-8.
pub fn read_text<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/corpus.txt"` → `"corpus"`
/// - `"corpus.txt"` → `"corpus"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn filename_without_extension() {
		assert_eq!(get_filename("./data/corpus.txt").unwrap(), "corpus");
		assert_eq!(get_filename("corpus").unwrap(), "corpus");
	}

	#[test]
	fn missing_file_is_an_error() {
		assert!(read_text("./this/file/does/not/exist.txt").is_err());
	}

	#[test]
	fn reads_whole_file() {
		let path = std::env::temp_dir().join("rs-ngram-core-read-text.txt");
		std::fs::write(&path, "line one\nline two\n").unwrap();
		assert_eq!(read_text(&path).unwrap(), "line one\nline two\n");
		std::fs::remove_file(&path).unwrap();
	}
}
