//! N-gram text statistics library.
//!
//! This crate computes, for an arbitrary input text:
//! - Token, distinct-token and stop-word counts
//! - Ranked frequency tables for unigrams up to 4-grams
//! - Unigram entropy (bits) and perplexity
//!
//! Every analysis is a pure computation over the input string: nothing is
//! cached or shared between calls.

/// Analysis pipeline and result types.
pub mod analysis;

/// Error taxonomy shared with callers.
pub mod error;

/// I/O helpers (loading text files).
pub mod io;

pub use analysis::analyzer::{analyze, Analyzer, DEFAULT_TOP_K};
pub use analysis::formatter::{AnalysisResult, NgramEntry, NgramTables};
pub use analysis::ngram::NgramOrder;
pub use error::AnalysisError;
