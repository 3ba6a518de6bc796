/// Shannon entropy in bits, `-Σ p·log2(p)`.
///
/// Non-positive probabilities are skipped so `log2(0)` is never evaluated.
/// Callers pass unigram probabilities.
pub fn entropy<I>(probabilities: I) -> f64
where
	I: IntoIterator<Item = f64>,
{
	let h: f64 = probabilities
		.into_iter()
		.filter(|&p| p > 0.0)
		.map(|p| -p * p.log2())
		.sum();
	// Normalize -0.0
	if h == 0.0 { 0.0 } else { h }
}

/// Perplexity, `2^entropy`.
///
/// A zero entropy (a single distinct token) is reported as
/// `f64::INFINITY`, which serializers turn into an explicit marker.
pub fn perplexity(entropy: f64) -> f64 {
	if entropy > 0.0 {
		entropy.exp2()
	} else {
		f64::INFINITY
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn uniform_distribution_has_log2_entropy() {
		let h = entropy([0.25; 4]);
		assert!((h - 2.0).abs() < 1e-12);
		assert!((perplexity(h) - 4.0).abs() < 1e-9);
	}

	#[test]
	fn certain_outcome_has_zero_entropy() {
		assert_eq!(entropy([1.0]), 0.0);
		assert!(entropy([1.0]).is_sign_positive());
		assert!(perplexity(0.0).is_infinite());
	}

	#[test]
	fn zero_probabilities_are_skipped() {
		let h = entropy([0.5, 0.0, 0.5]);
		assert!((h - 1.0).abs() < 1e-12);
	}

	#[test]
	fn empty_distribution_has_zero_entropy() {
		assert_eq!(entropy(Vec::<f64>::new()), 0.0);
	}
}
