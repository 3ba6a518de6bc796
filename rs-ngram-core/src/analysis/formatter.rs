use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::frequency::{FrequencyTable, ProbabilityTable};
use super::ngram::{Ngram, NgramOrder};
use super::stop_words::count_stop_words;

/// One row of a ranked n-gram table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NgramEntry {
	/// 1-based rank.
	#[serde(rename = "id")]
	pub rank: usize,
	/// Display form, e.g. `"\"the lazy\""`.
	pub token: String,
	pub count: usize,
	/// Relative frequency as a percentage, 2 decimals.
	pub probability: f64,
}

/// Ranked tables for the four reported orders.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NgramTables {
	pub unigrams: Vec<NgramEntry>,
	pub bigrams: Vec<NgramEntry>,
	pub trigrams: Vec<NgramEntry>,
	#[serde(rename = "4-grams")]
	pub four_grams: Vec<NgramEntry>,
}

impl NgramTables {
	/// Table of the given order.
	pub fn get(&self, order: NgramOrder) -> &[NgramEntry] {
		match order {
			NgramOrder::Unigram => &self.unigrams,
			NgramOrder::Bigram => &self.bigrams,
			NgramOrder::Trigram => &self.trigrams,
			NgramOrder::FourGram => &self.four_grams,
		}
	}

	fn get_mut(&mut self, order: NgramOrder) -> &mut Vec<NgramEntry> {
		match order {
			NgramOrder::Unigram => &mut self.unigrams,
			NgramOrder::Bigram => &mut self.bigrams,
			NgramOrder::Trigram => &mut self.trigrams,
			NgramOrder::FourGram => &mut self.four_grams,
		}
	}
}

/// Immutable snapshot of one text analysis.
///
/// Entropy and perplexity are rounded to 2 decimals. An infinite perplexity
/// (zero entropy) is kept as `f64::INFINITY` and serialized as `null`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalysisResult {
	pub total_tokens: usize,
	pub unique_tokens: usize,
	pub stop_words: usize,
	pub entropy: f64,
	#[serde(serialize_with = "serialize_perplexity", deserialize_with = "deserialize_perplexity")]
	pub perplexity: f64,
	pub ngrams: NgramTables,
}

/// Statistics gathered for a single n-gram order, ready to be formatted.
pub struct OrderStats<'a> {
	pub order: NgramOrder,
	pub frequencies: FrequencyTable<'a>,
	pub probabilities: ProbabilityTable<'a>,
}

fn serialize_perplexity<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
	if value.is_finite() {
		serializer.serialize_f64(*value)
	} else {
		serializer.serialize_none()
	}
}

fn deserialize_perplexity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
	Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

/// Rounds to 2 decimal places. Non-finite values pass through unchanged.
pub fn round2(value: f64) -> f64 {
	if !value.is_finite() {
		return value;
	}
	(value * 100.0).round() / 100.0
}

/// Renders an n-gram for display: tokens joined by a space, in double quotes.
pub fn format_ngram(ngram: &Ngram<'_>) -> String {
	format!("\"{ngram}\"")
}

/// Ranks a frequency table into at most `top_k` display rows.
fn rank_entries(stats: &OrderStats<'_>, top_k: usize) -> Vec<NgramEntry> {
	stats
		.frequencies
		.ranked(top_k)
		.into_iter()
		.enumerate()
		.map(|(i, (ngram, count))| NgramEntry {
			rank: i + 1,
			token: format_ngram(&ngram),
			count,
			probability: round2(stats.probabilities.get(&ngram).unwrap_or(0.0) * 100.0),
		})
		.collect()
}

/// Assembles the final result from the pipeline's intermediate values.
///
/// Orders missing from `stats` get an empty table.
pub fn format_result(
	tokens: &[String],
	stats: &[OrderStats<'_>],
	entropy: f64,
	perplexity: f64,
	top_k: usize,
) -> AnalysisResult {
	let unique_tokens = tokens.iter().map(String::as_str).collect::<HashSet<_>>().len();

	let mut ngrams = NgramTables::default();
	for order_stats in stats {
		*ngrams.get_mut(order_stats.order) = rank_entries(order_stats, top_k);
	}

	AnalysisResult {
		total_tokens: tokens.len(),
		unique_tokens,
		stop_words: count_stop_words(tokens),
		entropy: round2(entropy),
		perplexity: round2(perplexity),
		ngrams,
	}
}
