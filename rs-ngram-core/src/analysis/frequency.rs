use std::collections::HashMap;

use super::ngram::Ngram;

/// Occurrence counts of distinct n-grams.
///
/// Entries are kept in the order their n-gram was first observed, which is
/// what breaks ties when the table is ranked.
///
/// ## Invariants
/// - Each n-gram appears in `entries` exactly once
/// - `index` maps every n-gram to its position in `entries`
/// - Every count is strictly positive
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable<'a> {
	/// Distinct n-grams with their count, in first-seen order.
	entries: Vec<(Ngram<'a>, usize)>,
	/// Position of each n-gram in `entries`.
	index: HashMap<Ngram<'a>, usize>,
	/// Number of n-grams observed (sum of all counts).
	total: usize,
}

impl<'a> FrequencyTable<'a> {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `ngram`.
	///
	/// - If the n-gram was already seen, its count is increased.
	/// - Otherwise it is appended with an initial count of 1.
	pub fn add(&mut self, ngram: Ngram<'a>) {
		match self.index.get(&ngram).copied() {
			Some(position) => self.entries[position].1 += 1,
			None => {
				self.index.insert(ngram, self.entries.len());
				self.entries.push((ngram, 1));
			}
		}
		self.total += 1;
	}

	/// Count of `ngram`, or 0 if it was never observed.
	pub fn count(&self, ngram: &Ngram<'a>) -> usize {
		self.index.get(ngram).map_or(0, |&position| self.entries[position].1)
	}

	/// Total number of observed n-grams (not the number of distinct ones).
	pub fn total(&self) -> usize {
		self.total
	}

	/// Number of distinct n-grams.
	pub fn distinct(&self) -> usize {
		self.entries.len()
	}

	/// Entries in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = (Ngram<'a>, usize)> + '_ {
		self.entries.iter().copied()
	}

	/// The `k` most frequent entries, by descending count.
	///
	/// The sort is stable over first-seen order, so equal counts keep the
	/// order in which their n-grams first appeared in the text.
	pub fn ranked(&self, k: usize) -> Vec<(Ngram<'a>, usize)> {
		let mut sorted = self.entries.clone();
		sorted.sort_by(|a, b| b.1.cmp(&a.1));
		sorted.truncate(k);
		sorted
	}
}

/// Relative frequencies of the n-grams of a single order.
///
/// Shares the key order of the `FrequencyTable` it was computed from.
/// For a non-empty table the probabilities sum to 1.0 (within floating-point
/// tolerance).
#[derive(Clone, Debug, Default)]
pub struct ProbabilityTable<'a> {
	entries: Vec<(Ngram<'a>, f64)>,
	index: HashMap<Ngram<'a>, usize>,
}

impl<'a> ProbabilityTable<'a> {
	/// Probability of `ngram`, if it was observed.
	pub fn get(&self, ngram: &Ngram<'a>) -> Option<f64> {
		self.index.get(ngram).map(|&position| self.entries[position].1)
	}

	/// Raw probability values in first-seen order.
	pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
		self.entries.iter().map(|(_, p)| *p)
	}

	pub fn sum(&self) -> f64 {
		self.values().sum()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Counts occurrences of each distinct n-gram.
pub fn count_frequencies<'a, I>(ngrams: I) -> FrequencyTable<'a>
where
	I: IntoIterator<Item = Ngram<'a>>,
{
	let mut table = FrequencyTable::new();
	for ngram in ngrams {
		table.add(ngram);
	}
	table
}

/// Converts counts into relative frequencies, `count / total`.
///
/// `total` is the number of n-grams of that order, not the number of distinct
/// ones. A zero total yields an empty table.
pub fn compute_probabilities<'a>(frequencies: &FrequencyTable<'a>, total: usize) -> ProbabilityTable<'a> {
	if total == 0 {
		return ProbabilityTable::default();
	}

	let total = total as f64;
	let entries: Vec<(Ngram<'a>, f64)> = frequencies
		.iter()
		.map(|(ngram, count)| (ngram, count as f64 / total))
		.collect();
	let index = entries
		.iter()
		.enumerate()
		.map(|(position, (ngram, _))| (*ngram, position))
		.collect();

	ProbabilityTable { entries, index }
}
