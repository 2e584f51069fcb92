//! Random message synthesis.
//!
//! Draws codewords independently, with replacement, in proportion to
//! their weights. The random source is always supplied by the caller so
//! a seeded generator reproduces the same message.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::{Error, Result};

/// How each symbol is selected from the weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingStrategy {
    /// Invert the cumulative distribution with one uniform draw per symbol.
    #[default]
    Cumulative,
    /// Use `rand`'s [`WeightedIndex`] distribution.
    WeightedIndex,
}

/// Draw `count` symbols from `symbols` weighted by `weights`.
///
/// `count == 0` always yields an empty message, whatever the weights.
///
/// # Errors
/// - `Error::WeightMismatch` if `symbols` and `weights` differ in length.
/// - `Error::EmptyAlphabet` if there are no symbols to draw from.
/// - `Error::InvalidProbability` for a negative or non-finite weight, or
///   if all weights are zero.
pub fn synthesize<'a, S, R>(
    symbols: &'a [S],
    weights: &[f64],
    count: usize,
    strategy: SamplingStrategy,
    rng: &mut R,
) -> Result<Vec<&'a str>>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if count == 0 {
        return Ok(Vec::new());
    }
    if symbols.len() != weights.len() {
        return Err(Error::WeightMismatch {
            symbols: symbols.len(),
            weights: weights.len(),
        });
    }
    if symbols.is_empty() {
        return Err(Error::EmptyAlphabet);
    }
    if let Some(&bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(Error::InvalidProbability(bad));
    }

    let indices = match strategy {
        SamplingStrategy::Cumulative => draw_cumulative(weights, count, rng)?,
        SamplingStrategy::WeightedIndex => {
            let dist = WeightedIndex::<f64>::new(weights)
                .map_err(|_| Error::InvalidProbability(weights.iter().sum()))?;
            (0..count).map(|_| dist.sample(rng)).collect()
        }
    };

    Ok(indices.into_iter().map(|i| symbols[i].as_ref()).collect())
}

fn draw_cumulative<R: Rng + ?Sized>(
    weights: &[f64],
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let cumulative: Vec<f64> = weights
        .iter()
        .scan(0.0, |acc, &w| {
            *acc += w;
            Some(*acc)
        })
        .collect();
    let total = cumulative.last().copied().unwrap_or(0.0);
    if total <= 0.0 {
        return Err(Error::InvalidProbability(total));
    }

    let last = cumulative.len() - 1;
    Ok((0..count)
        .map(|_| {
            let u = rng.gen::<f64>() * total;
            // First cumulative sum above the draw; rounding can leave u past the end.
            cumulative.partition_point(|&c| c <= u).min(last)
        })
        .collect())
}

/// Join synthesized symbols into one message.
pub fn join_message<S: AsRef<str>>(symbols: &[S], separator: &str) -> String {
    symbols
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(separator)
}
