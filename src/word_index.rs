//! `word_index`: prefix tree and length lookup over a normalized word list.
//!
//! The index is built once from a caller-supplied list and is read-only
//! afterwards. Every entry is trimmed and lowercased; entries that end up
//! empty or contain anything other than ASCII letters are dropped silently.
//!
//! The trie is stored as an arena: `nodes[0]` is the root and every child link
//! is an index into `nodes`. Index `0` can never be a child, so it doubles as
//! the "no edge" marker.

use crate::letters::{letter_slot, ALPHABET_SIZE};
use crate::seed::hash_seed;
use std::collections::HashMap;

const ROOT: u32 = 0;
const NO_CHILD: u32 = 0;

#[derive(Debug, Clone)]
struct TrieNode {
    children: [u32; ALPHABET_SIZE],
    terminal: bool,
}

impl Default for TrieNode {
    fn default() -> Self {
        Self { children: [NO_CHILD; ALPHABET_SIZE], terminal: false }
    }
}

/// Immutable word index: prefix/membership queries plus words grouped by length.
#[derive(Debug, Clone)]
pub struct WordIndex {
    nodes: Vec<TrieNode>,
    /// Words grouped by length, each group in insertion order.
    by_length: HashMap<usize, Vec<String>>,
    /// All indexed words in insertion order (used for the fingerprint).
    words: Vec<String>,
}

impl Default for WordIndex {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            by_length: HashMap::new(),
            words: Vec::new(),
        }
    }
}

/// Trim and lowercase `raw`; `None` if the result is empty or not purely `a-z`.
pub(crate) fn normalize(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        None
    } else {
        Some(word)
    }
}

impl WordIndex {
    /// Build an index from any sequence of strings.
    ///
    /// Duplicates (after normalization) are indexed once, at their first position.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for raw in words {
            if let Some(word) = normalize(raw.as_ref()) {
                index.insert(word);
            }
        }
        log::debug!(
            "word index built: {} words, {} trie nodes",
            index.words.len(),
            index.nodes.len()
        );
        index
    }

    fn insert(&mut self, word: String) {
        let mut node = ROOT as usize;
        for b in word.bytes() {
            // normalize() guarantees a-z
            let slot = (b - b'a') as usize;
            let next = self.nodes[node].children[slot];
            node = if next == NO_CHILD {
                let fresh = self.nodes.len();
                self.nodes.push(TrieNode::default());
                self.nodes[node].children[slot] = fresh as u32;
                fresh
            } else {
                next as usize
            };
        }

        if self.nodes[node].terminal {
            return;
        }
        self.nodes[node].terminal = true;
        self.by_length.entry(word.len()).or_default().push(word.clone());
        self.words.push(word);
    }

    /// Follow `prefix` from the root; the node reached, if every edge exists.
    fn walk(&self, prefix: &[u8]) -> Option<usize> {
        let mut node = ROOT as usize;
        for &b in prefix {
            let next = self.nodes[node].children[letter_slot(b)?];
            if next == NO_CHILD {
                return None;
            }
            node = next as usize;
        }
        Some(node)
    }

    /// True iff some indexed word starts with `prefix`. The empty prefix always matches.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.has_prefix_bytes(prefix.as_bytes())
    }

    /// Byte-slice form of [`WordIndex::has_prefix`], used on the search hot path.
    #[must_use]
    pub fn has_prefix_bytes(&self, prefix: &[u8]) -> bool {
        self.walk(prefix).is_some()
    }

    /// True iff `word` itself was indexed.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.contains_bytes(word.as_bytes())
    }

    /// Byte-slice form of [`WordIndex::contains`].
    #[must_use]
    pub fn contains_bytes(&self, word: &[u8]) -> bool {
        self.walk(word).is_some_and(|node| self.nodes[node].terminal)
    }

    /// All indexed words of exactly `len` letters, in insertion order.
    #[must_use]
    pub fn words_of_length(&self, len: usize) -> &[String] {
        self.by_length.get(&len).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct indexed words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Content hash of the index: identical word lists (same words, same order)
    /// give identical fingerprints, and therefore identical generator output for a seed.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        hash_seed(self.words.join("\n").as_bytes())
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Ball "), Some("ball".to_string()));
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("can't"), None);
        assert_eq!(normalize("a1b2"), None);
        assert_eq!(normalize("café"), None);
    }

    #[test]
    fn test_contains_and_prefix() {
        let index = WordIndex::new(["star", "tare", "area", "read"]);

        assert!(index.contains("star"));
        assert!(index.contains("read"));
        assert!(!index.contains("sta"));
        assert!(!index.contains("stars"));

        assert!(index.has_prefix("st"));
        assert!(index.has_prefix("rea"));
        assert!(index.has_prefix("read"));
        assert!(!index.has_prefix("x"));
        assert!(!index.has_prefix("reads"));
    }

    #[test]
    fn test_empty_prefix_always_matches() {
        assert!(WordIndex::new(["cat"]).has_prefix(""));
        assert!(WordIndex::new(Vec::<String>::new()).has_prefix(""));
    }

    #[test]
    fn test_empty_string_is_never_contained() {
        let index = WordIndex::new(["", "cat"]);
        assert!(!index.contains(""));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_queries_are_case_insensitive() {
        let index = WordIndex::new(["LADY"]);
        assert!(index.contains("lady"));
        assert!(index.contains("Lady"));
        assert!(index.has_prefix("LA"));
    }

    #[test]
    fn test_malformed_entries_are_filtered() {
        let index = WordIndex::new(["able", "ab-le", "ab le", "4ble", "", "ÅBLE", "bole"]);
        assert_eq!(index.len(), 2);
        assert!(index.contains("able"));
        assert!(index.contains("bole"));
    }

    #[test]
    fn test_words_of_length_keeps_insertion_order() {
        let index = WordIndex::new(["lead", "at", "ball", "cat", "area", "Ball"]);

        assert_eq!(index.words_of_length(4), ["lead", "ball", "area"]);
        assert_eq!(index.words_of_length(2), ["at"]);
        assert_eq!(index.words_of_length(3), ["cat"]);
        assert!(index.words_of_length(7).is_empty());
    }

    #[test]
    fn test_empty_index() {
        let index = WordIndex::new(Vec::<&str>::new());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        for n in 0..6 {
            assert!(index.words_of_length(n).is_empty());
        }
        assert!(!index.contains("a"));
        assert!(!index.has_prefix("a"));
    }

    #[test]
    fn test_every_reachable_terminal_was_inserted() {
        let words = ["ball", "balls", "bald", "area"];
        let index: WordIndex = words.iter().collect();

        // every prefix of an inserted word is a prefix; only inserted words are terminal
        for w in words {
            for end in 0..=w.len() {
                assert!(index.has_prefix(&w[..end]));
            }
        }
        assert!(!index.contains("bal"));
        assert!(!index.contains("ba"));
        assert!(index.contains("balls"));
    }

    #[test]
    fn test_fingerprint_tracks_content_and_order() {
        let a = WordIndex::new(["ball", "area"]);
        let b = WordIndex::new(["BALL", "area", "ball"]);
        let c = WordIndex::new(["area", "ball"]);
        let d = WordIndex::new(["ball", "area", "lead"]);

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
        assert_ne!(a.fingerprint(), d.fingerprint());
    }
}
