/// Failure modes of a text analysis.
///
/// The first three variants describe bad input and are meant to be reported
/// back to the caller as a client error. `Internal` is the catch-all for
/// anything the pipeline cannot represent (non-finite scores and the like).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
	/// The request carried no text at all.
	#[error("Text is required")]
	InputMissing,

	/// The text is empty or only whitespace.
	#[error("Text cannot be empty")]
	InputEmpty,

	/// Tokenization produced nothing (punctuation-only input, for example).
	#[error("No valid tokens found in text")]
	NoTokens,

	/// An n-gram order of zero was requested.
	#[error("n-gram order must be >= 1, got {0}")]
	InvalidOrder(usize),

	/// Unexpected failure while computing statistics.
	#[error("Analysis failed: {0}")]
	Internal(String),
}

impl AnalysisError {
	/// Returns `true` when the error is caused by the caller's input.
	pub fn is_client_error(&self) -> bool {
		matches!(self, Self::InputMissing | Self::InputEmpty | Self::NoTokens)
	}
}
