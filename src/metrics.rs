//! Information metrics of a compact code.
//!
//! For a distribution $p_i$ coded with lengths $l_i$ over radix $r$:
//!
//! ```text
//! H   = -Σ p_i log_r p_i      (entropy, r-ary units)
//! L̄   =  Σ p_i l_i            (mean codeword length)
//! η   =  H / L̄                (efficiency)
//! ```
//!
//! These are only meaningful when the probabilities sum to 1.

use serde::Serialize;

/// Entropy, mean length and efficiency computed together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InformationMetrics {
    /// Shannon entropy in radix units.
    pub entropy: f64,
    /// Probability-weighted mean codeword length.
    pub mean_length: f64,
    /// `entropy / mean_length`.
    pub efficiency: f64,
}

impl InformationMetrics {
    /// Compute all metrics for index-aligned probabilities and lengths.
    pub fn new(probabilities: &[f64], lengths: &[usize], base: f64) -> Self {
        let entropy = entropy(probabilities, base);
        let mean_length = mean_length(probabilities, lengths);
        Self {
            entropy,
            mean_length,
            efficiency: efficiency(entropy, mean_length),
        }
    }
}

/// Shannon entropy `-Σ p log_base(p)`.
///
/// Zero probabilities contribute nothing (`p log p → 0`). A zero-information
/// source has entropy 0 for any base, including the degenerate base 1.
pub fn entropy(probabilities: &[f64], base: f64) -> f64 {
    let nats: f64 = probabilities
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| -p * p.ln())
        .sum();
    if nats == 0.0 {
        return 0.0;
    }
    nats / base.ln()
}

/// Mean codeword length `Σ p·l`.
pub fn mean_length(probabilities: &[f64], lengths: &[usize]) -> f64 {
    probabilities
        .iter()
        .zip(lengths)
        .map(|(&p, &l)| p * l as f64)
        .sum()
}

/// Code efficiency `H / L̄`; 0 for a zero mean length.
pub fn efficiency(entropy: f64, mean_length: f64) -> f64 {
    if mean_length == 0.0 {
        0.0
    } else {
        entropy / mean_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_dyadic() {
        let h = entropy(&[0.5, 0.25, 0.25], 2.0);
        assert!((h - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_uniform_ternary() {
        let third = 1.0 / 3.0;
        let h = entropy(&[third, third, third], 3.0);
        assert!((h - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_certain_source() {
        assert_eq!(entropy(&[1.0], 2.0), 0.0);
        assert_eq!(entropy(&[1.0], 1.0), 0.0);
    }

    #[test]
    fn test_entropy_skips_zero() {
        let h = entropy(&[0.5, 0.5, 0.0], 2.0);
        assert!((h - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_length() {
        assert_eq!(mean_length(&[0.5, 0.25, 0.25], &[1, 2, 2]), 1.5);
    }

    #[test]
    fn test_compact_code_is_fully_efficient() {
        let m = InformationMetrics::new(&[0.5, 0.25, 0.125, 0.125], &[1, 2, 3, 3], 2.0);
        assert!((m.entropy - 1.75).abs() < 1e-12);
        assert_eq!(m.mean_length, 1.75);
        assert!((m.efficiency - 1.0).abs() < 1e-12);
    }
}
