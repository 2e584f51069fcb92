//! Prefix-freedom (instantaneous code) detection.
//!
//! A code is instantaneous when no codeword is a prefix of another, so
//! each codeword can be recognized the moment its last symbol arrives.
//! Identical codewords count as violations: a string is a prefix of itself.
//!
//! [`find_prefix_violation`] walks a character trie, touching each input
//! character once. [`find_prefix_violation_pairwise`] is the quadratic
//! sort-and-compare reference the trie is checked against.

use std::collections::HashMap;

use serde::Serialize;

/// A pair of codewords where one is a prefix of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrefixViolation {
    /// Input index of the shorter (or equal) codeword.
    pub prefix: usize,
    /// Input index of the codeword it prefixes.
    pub word: usize,
}

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, usize>,
    // Input index of the codeword ending here.
    terminal: Option<usize>,
}

/// Return `true` when some codeword is a prefix of another (not instantaneous).
pub fn has_prefix_violation<S: AsRef<str>>(words: &[S]) -> bool {
    find_prefix_violation(words).is_some()
}

/// Find a codeword that prefixes another one, using a trie.
///
/// Words are inserted shortest first, so any prefix of the word being
/// inserted is already marked terminal somewhere along its path.
pub fn find_prefix_violation<S: AsRef<str>>(words: &[S]) -> Option<PrefixViolation> {
    let mut nodes = vec![TrieNode::default()];

    for idx in by_length(words) {
        let mut curr = 0;
        for ch in words[idx].as_ref().chars() {
            if let Some(prefix) = nodes[curr].terminal {
                return Some(PrefixViolation { prefix, word: idx });
            }
            curr = match nodes[curr].children.get(&ch) {
                Some(&next) => next,
                None => {
                    nodes.push(TrieNode::default());
                    let next = nodes.len() - 1;
                    nodes[curr].children.insert(ch, next);
                    next
                }
            };
        }
        if let Some(prefix) = nodes[curr].terminal {
            return Some(PrefixViolation { prefix, word: idx });
        }
        nodes[curr].terminal = Some(idx);
    }

    None
}

/// Quadratic reference: sort by length, then test every ordered pair.
pub fn find_prefix_violation_pairwise<S: AsRef<str>>(words: &[S]) -> Option<PrefixViolation> {
    let order = by_length(words);
    for (i, &short) in order.iter().enumerate() {
        for &long in &order[i + 1..] {
            if words[long].as_ref().starts_with(words[short].as_ref()) {
                return Some(PrefixViolation {
                    prefix: short,
                    word: long,
                });
            }
        }
    }
    None
}

// Stable: equal lengths keep input order.
fn by_length<S: AsRef<str>>(words: &[S]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..words.len()).collect();
    order.sort_by_key(|&i| words[i].as_ref().chars().count());
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_simple_prefix() {
        assert!(has_prefix_violation(&["a", "ab"]));
        assert_eq!(
            find_prefix_violation(&["ab", "a"]),
            Some(PrefixViolation { prefix: 1, word: 0 })
        );
    }

    #[test]
    fn test_prefix_free() {
        assert!(!has_prefix_violation(&["aa", "bb"]));
        assert!(!has_prefix_violation(&["0", "10", "110", "111"]));
    }

    #[test]
    fn test_duplicate_is_violation() {
        assert_eq!(
            find_prefix_violation(&["a", "bb", "bb"]),
            Some(PrefixViolation { prefix: 1, word: 2 })
        );
    }

    #[test]
    fn test_empty_and_single() {
        let empty: [&str; 0] = [];
        assert!(!has_prefix_violation(&empty));
        assert!(!has_prefix_violation(&["abc"]));
    }

    #[test]
    fn test_deep_prefix() {
        assert!(has_prefix_violation(&["10", "0", "1101", "11"]));
        assert!(!has_prefix_violation(&["10", "0", "1101", "111"]));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_trie_matches_pairwise(
            words in prop::collection::vec("[ab]{1,4}", 0..12),
        ) {
            prop_assert_eq!(
                find_prefix_violation(&words).is_some(),
                find_prefix_violation_pairwise(&words).is_some()
            );
        }

        #[test]
        fn prop_reported_pair_is_a_prefix(
            words in prop::collection::vec("[abc]{1,3}", 0..16),
        ) {
            if let Some(v) = find_prefix_violation(&words) {
                prop_assert_ne!(v.prefix, v.word);
                prop_assert!(words[v.word].starts_with(words[v.prefix].as_str()));
            }
        }
    }
}
