//! The partially filled grid shared by the builder and the uniqueness validator.

use crate::word_index::WordIndex;

/// Rows placed so far, plus the column prefixes they spell.
///
/// Invariant maintained by callers: every non-empty column prefix is a valid
/// prefix in the index the search runs against.
#[derive(Debug, Clone)]
pub(crate) struct PartialSquare<'w> {
    size: usize,
    rows: Vec<&'w str>,
    columns: Vec<Vec<u8>>,
}

impl<'w> PartialSquare<'w> {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            rows: Vec::with_capacity(size),
            columns: vec![Vec::with_capacity(size); size],
        }
    }

    /// Number of rows placed.
    pub(crate) fn depth(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.rows.len() == self.size
    }

    pub(crate) fn rows(&self) -> &[&'w str] {
        &self.rows
    }

    /// Letter at (`row`, `col`) of an already placed row.
    pub(crate) fn letter(&self, row: usize, col: usize) -> u8 {
        self.rows[row].as_bytes()[col]
    }

    /// Place `word` as the next row. Callers guarantee `word.len() == size`.
    pub(crate) fn push(&mut self, word: &'w str) {
        debug_assert_eq!(word.len(), self.size, "row length must equal the square size");
        debug_assert!(self.rows.len() < self.size, "square is already full");

        for (column, &b) in self.columns.iter_mut().zip(word.as_bytes()) {
            column.push(b);
        }
        self.rows.push(word);
    }

    /// Remove the last placed row.
    pub(crate) fn pop(&mut self) {
        if self.rows.pop().is_some() {
            for column in &mut self.columns {
                column.pop();
            }
        }
    }

    /// Every non-empty column prefix is a prefix of some indexed word.
    pub(crate) fn columns_are_prefixes(&self, index: &WordIndex) -> bool {
        self.columns
            .iter()
            .all(|column| column.is_empty() || index.has_prefix_bytes(column))
    }

    /// Placing `word` next would keep every column a valid prefix.
    pub(crate) fn extends_columns(&self, index: &WordIndex, word: &str) -> bool {
        let mut scratch: Vec<u8> = Vec::with_capacity(self.size);
        self.columns.iter().zip(word.as_bytes()).all(|(column, &b)| {
            scratch.clear();
            scratch.extend_from_slice(column);
            scratch.push(b);
            index.has_prefix_bytes(&scratch)
        })
    }

    /// Every column is a complete indexed word.
    pub(crate) fn columns_are_words(&self, index: &WordIndex) -> bool {
        self.columns.iter().all(|column| index.contains_bytes(column))
    }

    /// All placed rows are pairwise distinct.
    pub(crate) fn rows_are_distinct(&self) -> bool {
        self.rows
            .iter()
            .enumerate()
            .all(|(i, row)| !self.rows[..i].contains(row))
    }

    pub(crate) fn to_rows(&self) -> Vec<String> {
        self.rows.iter().map(|r| (*r).to_string()).collect()
    }
}
