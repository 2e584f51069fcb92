//! # Kraft
//!
//! *Is this list of codewords a usable code, and is it the best one for its source?*
//!
//! ## Intuition First
//!
//! Think of each codeword as claiming a slice of a pie. Over an $r$-letter
//! alphabet, a codeword of length $l$ claims $r^{-l}$ of the pie: short words
//! are greedy, long words are modest. If the claims add up to more than the
//! whole pie, some words must collide and no decoder can tell them apart.
//! If they add up to exactly the whole pie, nothing is wasted: the code is
//! *compact* for the distribution that gives each word its own slice.
//!
//! ## The Problem
//!
//! Given only a list of codewords, answer:
//! - **Decodability**: can any concatenation be split back uniquely?
//! - **Instantaneity**: can it be split without looking ahead (no word prefixes another)?
//! - **Compactness**: is the length assignment optimal for some source, and
//!   what are that source's entropy and the code's mean length?
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Kraft       Inequality for prefix (instantaneous) codes
//! 1952  Huffman     Constructive optimal prefix codes
//! 1956  McMillan    Same inequality holds for every uniquely decodable code
//! ```
//!
//! ## Mathematical Formulation
//!
//! For lengths $l_1 \dots l_n$ over radix $r$:
//!
//! ```text
//! S = Σ r^-l_i ≤ 1                 (Kraft-McMillan)
//! p_i = r^-l_i,  Σ p_i = 1         (compact)
//! H = -Σ p_i log_r p_i,  L̄ = Σ p_i l_i
//! ```
//!
//! For a compact code $H = L̄$, so its efficiency $H / L̄$ is 1.
//!
//! ## Complexity Analysis
//!
//! - **Kraft / compactness / metrics**: $O(n)$.
//! - **Prefix check**: $O(\sum |w_i|)$ with a trie, after an $O(n \log n)$ sort.
//! - **Synthesis**: $O(n + N \log n)$ for $N$ symbols.
//!
//! ## Failure Modes
//!
//! 1. **Rounding**: powers of non-power-of-two radices never sum to exactly 1;
//!    both the Kraft bound and the compactness test are tolerance-based.
//! 2. **Degenerate alphabets**: an empty list is vacuously decodable and
//!    instantaneous, but has no distribution to measure or sample.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **[`code`]**: codeword list, alphabet and lengths.
//! - **[`kraft`]**, **[`prefix`]**, **[`compact`]**, **[`metrics`]**: the individual checks.
//! - **[`synth`]**: seeded weighted message synthesis.
//! - **[`analysis`]**: the ordered decision procedure producing an [`AnalysisReport`].
//!
//! ## References
//!
//! - Kraft, L. G. (1949). "A device for quantizing, grouping, and coding amplitude modulated pulses."
//! - McMillan, B. (1956). "Two inequalities implied by unique decipherability."
//! - Cover, T. M., & Thomas, J. A. (2006). *Elements of Information Theory*, ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod code;
pub mod compact;
pub mod error;
pub mod kraft;
pub mod metrics;
pub mod prefix;
pub mod report;
pub mod synth;

pub use analysis::{analyze, AnalysisOptions, AnalysisReport, Decodability, Instantaneity, RadixPolicy};
pub use code::Code;
pub use error::{Error, Result};
pub use synth::SamplingStrategy;
