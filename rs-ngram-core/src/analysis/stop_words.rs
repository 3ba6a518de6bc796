use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Common English function words. Closed list, matched exactly against
/// normalized (lowercase) tokens.
pub const STOP_WORDS: [&str; 39] = [
	"the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
	"is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
	"will", "would", "should", "could", "may", "might", "must", "can", "this", "that", "these", "those",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOP_WORDS.into_iter().collect());

/// Returns `true` if `token` is a stop word.
///
/// Case-insensitive; no stemming, so `"doing"` is not a stop word.
pub fn is_stop_word(token: &str) -> bool {
	if STOP_WORD_SET.contains(token) {
		return true;
	}
	token.chars().any(char::is_uppercase) && STOP_WORD_SET.contains(token.to_lowercase().as_str())
}

/// Number of tokens (with repetition) that are stop words.
pub fn count_stop_words<S: AsRef<str>>(tokens: &[S]) -> usize {
	tokens.iter().filter(|t| is_stop_word(t.as_ref())).count()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn matches_exact_words_only() {
		assert!(is_stop_word("the"));
		assert!(is_stop_word("those"));
		assert!(!is_stop_word("doing"));
		assert!(!is_stop_word("then"));
	}

	#[test]
	fn matching_is_case_insensitive() {
		assert!(is_stop_word("The"));
		assert!(is_stop_word("WITH"));
	}

	#[test]
	fn counts_every_occurrence() {
		let tokens = ["the", "fox", "and", "the", "dog"];
		assert_eq!(count_stop_words(&tokens[..]), 3);
	}
}
