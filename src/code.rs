//! Codeword lists and their alphabet.
//!
//! A code is an ordered list of codewords. Its alphabet is the set of
//! distinct characters used across all codewords, and the alphabet's
//! cardinality is the radix used by every other module.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// An ordered list of codewords with its derived alphabet and lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    words: Vec<String>,
    lengths: Vec<usize>,
    alphabet: Vec<char>,
}

impl Code {
    /// Build a code from already-split codewords.
    ///
    /// Empty strings are dropped; a codeword is a non-empty sequence.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.is_empty())
            .collect();
        // Lengths count characters, not bytes.
        let lengths = words.iter().map(|w| w.chars().count()).collect();
        let alphabet = words
            .iter()
            .flat_map(|w| w.chars())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            words,
            lengths,
            alphabet,
        }
    }

    /// Build a code by splitting `text` on whitespace.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    /// Read a whitespace-separated codeword file.
    ///
    /// # Errors
    /// Returns `Error::MissingInput` if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::MissingInput {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    /// Codewords in input order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Codeword lengths, index-aligned with [`Code::words`].
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Distinct characters across all codewords, sorted.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Alphabet cardinality.
    pub fn radix(&self) -> usize {
        self.alphabet.len()
    }

    /// Number of codewords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when there are no codewords.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_text_splits_on_any_whitespace() {
        let code = Code::from_text("0 10\n110\t111  ");
        assert_eq!(code.words(), &["0", "10", "110", "111"]);
        assert_eq!(code.lengths(), &[1, 2, 3, 3]);
        assert_eq!(code.alphabet(), &['0', '1']);
        assert_eq!(code.radix(), 2);
    }

    #[test]
    fn test_alphabet_is_sorted_and_distinct() {
        let code = Code::from_words(["cab", "ba", "c"]);
        assert_eq!(code.alphabet(), &['a', 'b', 'c']);
        assert_eq!(code.radix(), 3);
    }

    #[test]
    fn test_lengths_count_chars() {
        let code = Code::from_words(["αβ", "γ"]);
        assert_eq!(code.lengths(), &[2, 1]);
        assert_eq!(code.radix(), 3);
    }

    #[test]
    fn test_empty_input_is_degenerate() {
        let code = Code::from_text("  \n ");
        assert!(code.is_empty());
        assert_eq!(code.radix(), 0);
        assert!(code.lengths().is_empty());
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a bb bb").unwrap();
        let code = Code::from_path(file.path()).unwrap();
        assert_eq!(code.len(), 3);
        assert_eq!(code.lengths(), &[1, 2, 2]);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Code::from_path(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, Error::MissingInput { .. }));
    }
}
