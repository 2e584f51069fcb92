//! Kraft-McMillan inequality.
//!
//! A set of lengths $l_i$ admits a uniquely decodable code over an
//! $r$-symbol alphabet iff
//!
//! ```text
//! S = Σ r^-l_i ≤ 1
//! ```

/// Slack allowed above 1 for a sum of `terms` weights.
///
/// Each addition rounds by at most one ulp of a value near 1, so the slack
/// grows with the term count and never covers a real excess like `2^-41`.
pub fn kraft_tolerance(terms: usize) -> f64 {
    terms.max(1) as f64 * f64::EPSILON
}

/// Weight `radix^-length` contributed by one codeword.
pub fn codeword_weight(length: usize, radix: usize) -> f64 {
    let exp = i32::try_from(length).unwrap_or(i32::MAX);
    (radix as f64).powi(-exp)
}

/// Kraft sum `Σ radix^-l` over all lengths.
pub fn kraft_sum(lengths: &[usize], radix: usize) -> f64 {
    lengths.iter().map(|&l| codeword_weight(l, radix)).sum()
}

/// Check whether `lengths` satisfy the Kraft-McMillan inequality for `radix`.
///
/// An empty length list is vacuously valid.
pub fn is_kraft_valid(lengths: &[usize], radix: usize) -> bool {
    within_kraft_bound(kraft_sum(lengths, radix), lengths.len())
}

/// Check an already computed Kraft sum of `terms` weights against the bound.
pub fn within_kraft_bound(sum: f64, terms: usize) -> bool {
    sum <= 1.0 + kraft_tolerance(terms)
}
