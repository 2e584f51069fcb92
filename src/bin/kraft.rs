use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use kraft::analysis::parse_message_length;
use kraft::report::{render_json, write_output};
use kraft::synth::join_message;
use kraft::{analyze, AnalysisOptions, Code, RadixPolicy, SamplingStrategy};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    Cumulative,
    Weighted,
}

impl From<Strategy> for SamplingStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Cumulative => SamplingStrategy::Cumulative,
            Strategy::Weighted => SamplingStrategy::WeightedIndex,
        }
    }
}

/// Check a codeword list for decodability and compactness
#[derive(Debug, Parser)]
#[command(name = "kraft")]
#[command(about = "Kraft-McMillan, prefix and compactness analysis of a codeword file")]
struct Config {
    /// File of whitespace-separated codewords
    input: PathBuf,

    /// Where to write the synthesized message (or the report if no message)
    output: Option<PathBuf>,

    /// Number of symbols to synthesize
    #[arg(value_parser = parse_message_length)]
    n: Option<usize>,

    /// Seed for the random generator (default: from OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Separator placed between synthesized symbols
    #[arg(long, default_value = " ")]
    separator: String,

    /// Use a fixed radix instead of the alphabet size
    #[arg(long)]
    radix: Option<u32>,

    /// Symbol sampling method
    #[arg(long, value_enum, default_value = "cumulative")]
    strategy: Strategy,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let config = Config::parse();

    env_logger::Builder::from_default_env()
        .filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let code = Code::from_path(&config.input)?;
    info!("read {} codewords from {:?}", code.len(), config.input);

    let options = AnalysisOptions {
        radix: config.radix.map_or(RadixPolicy::Alphabet, RadixPolicy::Fixed),
        message_length: config.n,
        strategy: config.strategy.into(),
    };
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = analyze(&code, &options, &mut rng).context("analysis failed")?;
    if config.json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", report);
    }

    if let Some(path) = &config.output {
        let contents = match &report.message {
            Some(message) => join_message(message, &config.separator),
            None => report.to_string(),
        };
        if let Err(e) = write_output(path, &contents) {
            error!("{}", e);
            return Err(e.into());
        }
        info!("result written to {:?}", path);
    }

    Ok(())
}
