//! Text analysis pipeline.
//!
//! Data flows strictly in one direction:
//! - Tokenization (`tokenizer`)
//! - Sliding-window n-gram generation (`ngram`)
//! - Frequency counting and probability estimation (`frequency`)
//! - Entropy and perplexity scoring (`scorer`)
//! - Result assembly (`formatter`)
//!
//! `analyzer` chains the stages together.

/// Orchestration of the pipeline (`Analyzer`, `analyze`).
pub mod analyzer;

/// Result types and display formatting.
///
/// Ranks frequency tables, renders n-grams, rounds scores
/// and builds the serializable `AnalysisResult`.
pub mod formatter;

/// Frequency and probability tables.
pub mod frequency;

/// N-gram windows and the four reported orders.
pub mod ngram;

/// Information-theoretic scores over the unigram distribution.
pub mod scorer;

/// Closed English stop-word list.
pub mod stop_words;

/// Lowercase, punctuation-stripping word splitter.
pub mod tokenizer;
