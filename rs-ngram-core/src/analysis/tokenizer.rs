use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is neither a word character nor whitespace.
///
/// Word characters are alphabetic or numeric code points (as
/// `char::is_alphanumeric`) plus `_`. Combining marks and connector
/// punctuation other than `_` are separators.
static NON_WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{Alphabetic}\p{N}_\s]").unwrap());

/// Splits raw text into normalized tokens.
///
/// - Lowercases the whole input
/// - Replaces every non-word, non-whitespace character by a single space
/// - Splits on runs of whitespace, dropping empty fragments
///
/// Punctuation therefore acts as a separator: `"don't"` yields `["don", "t"]`.
/// Text made only of punctuation and whitespace yields an empty vector; it is
/// up to the caller to reject it.
pub fn tokenize(text: &str) -> Vec<String> {
	let lowered = text.to_lowercase();
	NON_WORD_PATTERN
		.replace_all(&lowered, " ")
		.split_whitespace()
		.map(str::to_owned)
		.collect()
}
