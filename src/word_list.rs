//! `word_list`: load and preprocess the dictionary the generator draws from.
//!
//! A word list can come from a file or from an in-memory string. The latter is
//! what WebAssembly builds use, since the browser hands us text it fetched.
//!
//! The parsing logic:
//! - Each line is either `word` or `word;score`.
//! - Unscored lines are always kept; scored lines below `min_score` are skipped.
//! - Lines whose score does not parse are skipped.
//! - Words are trimmed and lowercased. Anything that is not plain ASCII a-z
//!   after that (hyphens, spaces, accents, digits) is skipped.
//! - The final list is deduplicated and sorted by length, then alphabetically.
//!
//! `load_from_path` is native-only.

/// A processed, ready-to-index word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Lowercase words, sorted by (length, alphabetical).
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a word list from an in-memory string. Works everywhere, including WASM.
    #[must_use]
    pub fn parse_from_str(contents: &str, min_score: i32) -> WordList {
        let mut words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() {
                    return None;
                }

                let word_raw = match line.split_once(';') {
                    Some((word_raw, score_raw)) => {
                        let score: i32 = score_raw.trim().parse().ok()?;
                        if score < min_score {
                            return None;
                        }
                        word_raw
                    }
                    None => line,
                };

                crate::word_index::normalize(word_raw)
            })
            .collect();

        // dedup only removes adjacent duplicates
        words.sort();
        words.dedup();
        words.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        WordList { words }
    }

    /// Read from a file path and parse.
    ///
    /// # Example:
    /// `let word_list = WordList::load_from_path("words.txt", 0)?;`
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        min_score: i32,
    ) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data, min_score))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
