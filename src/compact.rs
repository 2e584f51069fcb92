//! Compactness: implied probabilities of a Kraft-tight code.
//!
//! If a code is compact, each codeword length is exactly $-\log_r p_i$,
//! so the implied probability of word $i$ is $r^{-l_i}$. The code is
//! compact iff those probabilities form a distribution (sum to 1).

use serde::Serialize;

use crate::kraft::codeword_weight;

/// Relative tolerance for treating the probability mass as unity.
pub const COMPACT_REL_TOLERANCE: f64 = 1e-9;

/// Probabilities implied by codeword lengths, with their total mass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompactProbabilities {
    /// `radix^-length` per codeword, index-aligned with the lengths.
    pub probabilities: Vec<f64>,
    /// Plain sum of `probabilities`.
    pub sum: f64,
}

impl CompactProbabilities {
    /// True when the implied mass is 1 within [`COMPACT_REL_TOLERANCE`].
    ///
    /// Only then may the probabilities feed entropy, mean length or synthesis.
    pub fn is_compact(&self) -> bool {
        approx_eq(self.sum, 1.0, COMPACT_REL_TOLERANCE)
    }
}

/// Derive `radix^-l` for every length.
pub fn derive_compact_probabilities(lengths: &[usize], radix: usize) -> CompactProbabilities {
    let probabilities: Vec<f64> = lengths.iter().map(|&l| codeword_weight(l, radix)).collect();
    let sum = probabilities.iter().sum();
    CompactProbabilities { probabilities, sum }
}

/// Relative closeness: `|a - b| <= rel_tol * max(|a|, |b|)`.
pub fn approx_eq(a: f64, b: f64, rel_tol: f64) -> bool {
    (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}
