//! End-to-end analysis of a code.
//!
//! The checks run in a fixed order:
//!
//! ```text
//! Kraft sum > 1  ──► NotDecodable            (stop)
//! Kraft sum ≤ 1  ──► UniquelyDecodable
//!                      ├─ no prefix pair  ──► Instantaneous
//!                      └─ prefix pair     ──► NonInstantaneous
//!                    compactness (independent of instantaneity)
//!                      └─ compact ──► entropy, mean length, message
//! ```
//!
//! A non-decodable code never reaches the compactness stage, so it can never
//! be reported as compact or carry an entropy.

use log::{debug, warn};
use rand::Rng;
use serde::Serialize;

use crate::code::Code;
use crate::compact::{derive_compact_probabilities, CompactProbabilities};
use crate::error::{Error, Result};
use crate::kraft::{kraft_sum, within_kraft_bound};
use crate::metrics::InformationMetrics;
use crate::prefix::{find_prefix_violation, PrefixViolation};
use crate::synth::{synthesize, SamplingStrategy};

/// Which radix the Kraft sum, probabilities and logarithms use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadixPolicy {
    /// Number of distinct characters in the code.
    #[default]
    Alphabet,
    /// A caller-chosen radix, at least 2.
    Fixed(u32),
}

/// Knobs for [`analyze`].
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Radix selection.
    pub radix: RadixPolicy,
    /// Length of the message to synthesize, if any.
    pub message_length: Option<usize>,
    /// How message symbols are drawn.
    pub strategy: SamplingStrategy,
}

/// Whether the codeword set can be read back without lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Instantaneity {
    /// No codeword prefixes another.
    Instantaneous,
    /// Some codeword prefixes another.
    NonInstantaneous(PrefixViolation),
}

/// Decodability classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decodability {
    /// Kraft-McMillan fails.
    NotDecodable,
    /// Kraft-McMillan holds.
    UniquelyDecodable(Instantaneity),
}

/// Immutable result of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Codewords in input order.
    pub words: Vec<String>,
    /// Sorted alphabet.
    pub alphabet: Vec<char>,
    /// Radix actually used.
    pub radix: usize,
    /// Codeword lengths.
    pub lengths: Vec<usize>,
    /// `Σ radix^-l`.
    pub kraft_sum: f64,
    /// Kraft and prefix verdicts.
    pub decodability: Decodability,
    /// Implied probabilities; absent for non-decodable or empty codes.
    pub compactness: Option<CompactProbabilities>,
    /// Entropy and mean length; present only for compact codes.
    pub metrics: Option<InformationMetrics>,
    /// Synthesized message; present only when requested and compact.
    pub message: Option<Vec<String>>,
}

impl AnalysisReport {
    /// Kraft-McMillan verdict.
    pub fn is_kraft_valid(&self) -> bool {
        matches!(self.decodability, Decodability::UniquelyDecodable(_))
    }

    /// Prefix-freedom verdict; false for a non-decodable code.
    pub fn is_instantaneous(&self) -> bool {
        matches!(
            self.decodability,
            Decodability::UniquelyDecodable(Instantaneity::Instantaneous)
        )
    }

    /// Compactness verdict.
    pub fn is_compact(&self) -> bool {
        self.compactness
            .as_ref()
            .is_some_and(CompactProbabilities::is_compact)
    }
}

/// Parse a requested message length.
///
/// # Errors
/// Returns `Error::InvalidRequestedLength` unless `s` is a non-negative integer.
pub fn parse_message_length(s: &str) -> Result<usize> {
    s.trim()
        .parse::<usize>()
        .map_err(|_| Error::InvalidRequestedLength(s.to_string()))
}

/// Run every check against `code` and assemble the report.
///
/// # Errors
/// Returns `Error::InvalidRadix` for a fixed radix below 2. Synthesis
/// errors propagate as-is.
pub fn analyze<R: Rng + ?Sized>(
    code: &Code,
    options: &AnalysisOptions,
    rng: &mut R,
) -> Result<AnalysisReport> {
    let radix = match options.radix {
        RadixPolicy::Alphabet => code.radix(),
        RadixPolicy::Fixed(r) if r >= 2 => r as usize,
        RadixPolicy::Fixed(r) => return Err(Error::InvalidRadix(r)),
    };
    let lengths = code.lengths();
    let sum = kraft_sum(lengths, radix);
    debug!("radix {}, lengths {:?}, kraft sum {}", radix, lengths, sum);

    let mut report = AnalysisReport {
        words: code.words().to_vec(),
        alphabet: code.alphabet().to_vec(),
        radix,
        lengths: lengths.to_vec(),
        kraft_sum: sum,
        decodability: Decodability::NotDecodable,
        compactness: None,
        metrics: None,
        message: None,
    };

    if !within_kraft_bound(sum, lengths.len()) {
        debug!("kraft-mcmillan fails, code is not decodable");
        return Ok(report);
    }

    let instantaneity = match find_prefix_violation(code.words()) {
        None => Instantaneity::Instantaneous,
        Some(v) => Instantaneity::NonInstantaneous(v),
    };
    debug!("prefix check: {:?}", instantaneity);
    report.decodability = Decodability::UniquelyDecodable(instantaneity);

    if code.is_empty() {
        if options.message_length.is_some_and(|n| n > 0) {
            warn!("empty code, skipping message synthesis");
        }
        return Ok(report);
    }

    let cp = derive_compact_probabilities(lengths, radix);
    debug!("implied probability mass {}", cp.sum);
    if cp.is_compact() {
        report.metrics = Some(InformationMetrics::new(
            &cp.probabilities,
            lengths,
            radix as f64,
        ));
        if let Some(n) = options.message_length {
            let message = synthesize(code.words(), &cp.probabilities, n, options.strategy, rng)?;
            report.message = Some(message.into_iter().map(str::to_string).collect());
        }
    } else if options.message_length.is_some() {
        warn!(
            "code is not compact (probability mass {}), skipping message synthesis",
            cp.sum
        );
    }
    report.compactness = Some(cp);

    Ok(report)
}
