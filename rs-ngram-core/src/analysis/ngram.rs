use std::fmt;

use crate::error::AnalysisError;

/// A contiguous window of `n` tokens borrowed from a token sequence.
///
/// Two n-grams are equal when every positional token is equal, so
/// `("the", "dog")` and `("dog", "the")` are distinct.
///
/// # Invariants
/// - The window is never empty
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ngram<'a>(&'a [String]);

impl<'a> Ngram<'a> {
	/// Number of tokens in the n-gram.
	pub fn order(&self) -> usize {
		self.0.len()
	}
}

impl fmt::Display for Ngram<'_> {
	/// Tokens joined by a single space.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.join(" "))
	}
}

/// The four n-gram orders reported by an analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NgramOrder {
	Unigram,
	Bigram,
	Trigram,
	FourGram,
}

impl NgramOrder {
	/// Every reported order, ascending.
	pub const ALL: [NgramOrder; 4] = [Self::Unigram, Self::Bigram, Self::Trigram, Self::FourGram];

	/// Window size of this order.
	pub fn n(self) -> usize {
		match self {
			Self::Unigram => 1,
			Self::Bigram => 2,
			Self::Trigram => 3,
			Self::FourGram => 4,
		}
	}

	/// Label under which the order is exposed in a result.
	pub fn label(self) -> &'static str {
		match self {
			Self::Unigram => "unigrams",
			Self::Bigram => "bigrams",
			Self::Trigram => "trigrams",
			Self::FourGram => "4-grams",
		}
	}
}

/// Produces every n-gram of order `n` with a sliding window over `tokens`.
///
/// Yields `tokens.len() - n + 1` n-grams, or none at all when the sequence is
/// shorter than `n`. A short sequence is not an error.
///
/// # Errors
/// Returns `AnalysisError::InvalidOrder` if `n == 0`.
pub fn generate_ngrams(tokens: &[String], n: usize) -> Result<Vec<Ngram<'_>>, AnalysisError> {
	if n == 0 {
		return Err(AnalysisError::InvalidOrder(n));
	}
	Ok(tokens.windows(n).map(Ngram).collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(text: &str) -> Vec<String> {
		text.split_whitespace().map(str::to_owned).collect()
	}

	#[test]
	fn unigrams_are_single_token_windows() {
		let t = tokens("a b a");
		let grams = generate_ngrams(&t, 1).unwrap();
		assert_eq!(grams.len(), 3);
		assert!(grams.iter().all(|g| g.order() == 1));
		assert_eq!(grams[2].to_string(), "a");
	}

	#[test]
	fn windows_slide_by_one() {
		let t = tokens("a b c d");
		let grams: Vec<String> = generate_ngrams(&t, 3)
			.unwrap()
			.iter()
			.map(ToString::to_string)
			.collect();
		assert_eq!(grams, vec!["a b c", "b c d"]);
	}

	#[test]
	fn short_sequence_yields_nothing() {
		let t = tokens("a b");
		assert!(generate_ngrams(&t, 4).unwrap().is_empty());
	}

	#[test]
	fn order_zero_is_rejected() {
		let t = tokens("a b");
		assert_eq!(generate_ngrams(&t, 0), Err(AnalysisError::InvalidOrder(0)));
	}

	#[test]
	fn order_matters_for_equality() {
		let t = tokens("x y x");
		let grams = generate_ngrams(&t, 2).unwrap();
		assert_ne!(grams[0], grams[1]);
	}

	#[test]
	fn labels_are_fixed() {
		let labels: Vec<_> = NgramOrder::ALL.iter().map(|o| o.label()).collect();
		assert_eq!(labels, vec!["unigrams", "bigrams", "trigrams", "4-grams"]);
		assert_eq!(NgramOrder::FourGram.n(), 4);
	}
}
