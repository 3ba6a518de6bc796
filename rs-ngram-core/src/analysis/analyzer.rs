use log::debug;

use crate::error::AnalysisError;
use super::formatter::{format_result, AnalysisResult, OrderStats};
use super::frequency::{compute_probabilities, count_frequencies};
use super::ngram::{generate_ngrams, NgramOrder};
use super::scorer::{entropy, perplexity};
use super::tokenizer::tokenize;

/// Maximum number of rows kept per ranked table.
pub const DEFAULT_TOP_K: usize = 50;

/// Runs the whole analysis pipeline.
///
/// text → tokens → n-grams (n = 1..4) → frequencies → probabilities
/// → (top-K tables, entropy, perplexity) → `AnalysisResult`
///
/// Holds no state between calls: the same input always produces the same
/// result, and one `Analyzer` can be shared freely across threads.
#[derive(Clone, Copy, Debug)]
pub struct Analyzer {
	top_k: usize,
}

impl Default for Analyzer {
	fn default() -> Self {
		Self { top_k: DEFAULT_TOP_K }
	}
}

impl Analyzer {
	/// Creates an analyzer keeping `top_k` rows per ranked table.
	pub fn new(top_k: usize) -> Self {
		Self { top_k }
	}

	pub fn top_k(&self) -> usize {
		self.top_k
	}

	/// Analyzes `text`.
	///
	/// # Errors
	/// - `InputEmpty` if the text is blank after trimming
	/// - `NoTokens` if tokenization yields nothing
	/// - `Internal` if the entropy is not a finite number
	pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
		if text.trim().is_empty() {
			return Err(AnalysisError::InputEmpty);
		}

		let tokens = tokenize(text);
		if tokens.is_empty() {
			return Err(AnalysisError::NoTokens);
		}
		debug!("tokenized {} characters into {} tokens", text.len(), tokens.len());

		let mut stats = Vec::with_capacity(NgramOrder::ALL.len());
		for order in NgramOrder::ALL {
			let ngrams = generate_ngrams(&tokens, order.n())?;
			let total = ngrams.len();
			let frequencies = count_frequencies(ngrams);
			let probabilities = compute_probabilities(&frequencies, total);
			debug!("{}: {} total, {} distinct", order.label(), total, frequencies.distinct());
			stats.push(OrderStats { order, frequencies, probabilities });
		}

		// Information scores come from the unigram distribution only
		let h = stats
			.iter()
			.find(|s| s.order == NgramOrder::Unigram)
			.map_or(0.0, |s| entropy(s.probabilities.values()));
		if !h.is_finite() {
			return Err(AnalysisError::Internal(format!("entropy is not finite ({h})")));
		}

		Ok(format_result(&tokens, &stats, h, perplexity(h), self.top_k))
	}
}

/// Analyzes `text` with the default settings.
///
/// See [`Analyzer::analyze`].
pub fn analyze(text: &str) -> Result<AnalysisResult, AnalysisError> {
	Analyzer::default().analyze(text)
}
