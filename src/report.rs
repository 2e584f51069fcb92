//! Human-readable and JSON rendering of an [`AnalysisReport`].

use std::fmt;
use std::fs;
use std::path::Path;

use crate::analysis::{AnalysisReport, Decodability, Instantaneity};
use crate::error::{Error, Result};

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Code alphabet: {:?}", self.alphabet)?;
        writeln!(f, "Radix: {}", self.radix)?;
        writeln!(f, "Word lengths: {:?}", self.lengths)?;
        writeln!(f, "Kraft-McMillan sum: {}", self.kraft_sum)?;

        match self.decodability {
            Decodability::NotDecodable => {
                return writeln!(
                    f,
                    "The code does NOT satisfy the Kraft-McMillan inequality: it is not uniquely decodable."
                );
            }
            Decodability::UniquelyDecodable(Instantaneity::Instantaneous) => {
                writeln!(
                    f,
                    "The code satisfies the Kraft-McMillan inequality and is instantaneous (no word is a prefix of another)."
                )?;
            }
            Decodability::UniquelyDecodable(Instantaneity::NonInstantaneous(v)) => {
                writeln!(
                    f,
                    "The code satisfies the Kraft-McMillan inequality but is NOT instantaneous: {} is a prefix of {}.",
                    word_label(&self.words, v.prefix),
                    word_label(&self.words, v.word)
                )?;
            }
        }

        let Some(cp) = &self.compactness else {
            return Ok(());
        };

        writeln!(f, "Implied probabilities:")?;
        for ((word, len), p) in self.words.iter().zip(&self.lengths).zip(&cp.probabilities) {
            writeln!(f, "  {:<16} length {:>3}  p = {:.6}", word, len, p)?;
        }
        writeln!(f, "Probability mass: {}", cp.sum)?;

        if !cp.is_compact() {
            return writeln!(f, "The code is NOT compact.");
        }
        writeln!(f, "The code is compact.")?;

        if let Some(m) = &self.metrics {
            writeln!(f, "Entropy: {:.6} (base {})", m.entropy, self.radix)?;
            writeln!(f, "Mean length: {:.6}", m.mean_length)?;
            writeln!(f, "Efficiency: {:.6}", m.efficiency)?;
        }
        if let Some(message) = &self.message {
            writeln!(f, "Message ({} symbols): {}", message.len(), message.join(" "))?;
        }
        Ok(())
    }
}

// Quoted word, or its index when the report's words do not cover it.
fn word_label(words: &[String], idx: usize) -> String {
    match words.get(idx) {
        Some(w) => format!("{:?}", w),
        None => format!("word #{}", idx),
    }
}

/// Write rendered output (a report or a joined message) to `path`.
///
/// # Errors
/// Returns `Error::WriteFailure` if the file cannot be written.
pub fn write_output(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(|source| Error::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use crate::analysis::{analyze, AnalysisOptions, Decodability, Instantaneity};
    use crate::code::Code;
    use crate::prefix::PrefixViolation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn report_for(text: &str, message_length: Option<usize>) -> AnalysisReport {
        let options = AnalysisOptions {
            message_length,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        analyze(&Code::from_text(text), &options, &mut rng).unwrap()
    }

    #[test]
    fn test_render_not_decodable() {
        let text = report_for("0 1 00", None).to_string();
        assert!(text.contains("NOT satisfy"));
        assert!(!text.contains("compact"));
        assert!(!text.contains("Entropy"));
    }

    #[test]
    fn test_render_names_prefix_pair() {
        let text = report_for("0 01 11", None).to_string();
        assert!(text.contains("\"0\" is a prefix of \"01\""));
    }

    #[test]
    fn test_render_compact_with_message() {
        let text = report_for("0 10 11", Some(4)).to_string();
        assert!(text.contains("instantaneous"));
        assert!(text.contains("The code is compact."));
        assert!(text.contains("Entropy: 1.500000 (base 2)"));
        assert!(text.contains("Mean length: 1.500000"));
        assert!(text.contains("Message (4 symbols)"));
    }

    #[test]
    fn test_render_not_compact() {
        let text = report_for("0 100", Some(4)).to_string();
        assert!(text.contains("NOT compact"));
        assert!(!text.contains("Entropy"));
        assert!(!text.contains("Message"));
    }

    #[test]
    fn test_render_out_of_range_pair() {
        let mut report = report_for("0 01 11", None);
        report.words.truncate(1);
        report.decodability =
            Decodability::UniquelyDecodable(Instantaneity::NonInstantaneous(PrefixViolation {
                prefix: 0,
                word: 7,
            }));
        let text = report.to_string();
        assert!(text.contains("\"0\" is a prefix of word #7"));
    }

    #[test]
    fn test_write_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("message.txt");
        write_output(&path, "0 10 11").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0 10 11");
    }

    #[test]
    fn test_write_failure_keeps_report() {
        let report = report_for("0 10 11", Some(4));
        let rendered = report.to_string();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = write_output(&path, &rendered).unwrap_err();
        assert!(matches!(err, Error::WriteFailure { .. }));
        assert!(err.to_string().contains("out.txt"));
        // the failed write leaves the analysis untouched
        assert_eq!(report.to_string(), rendered);
        assert!(report.is_compact());
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&report_for("0 10 11", None)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["radix"], 2);
        assert_eq!(value["lengths"], serde_json::json!([1, 2, 2]));
        assert_eq!(value["decodability"]["UniquelyDecodable"], "Instantaneous");
        assert_eq!(value["metrics"]["mean_length"], 1.5);
    }
}
