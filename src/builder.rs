//! Depth-first square builder.
//!
//! Given a first row, fill the remaining rows one at a time. Because row `k`
//! must equal column `k`, the first `k` letters of row `k` are already fixed
//! by the rows above it (`row_k[c] == row_c[k]` for `c < k`). Candidates are
//! drawn from the words of the right length that
//!
//! - have not been used as a row yet,
//! - agree with every fixed position, and
//! - keep every column a valid prefix in the word index.
//!
//! Candidates are tried in order of descending distinct-letter count (ties
//! keep dictionary order); the first complete square wins. [`SquareBuilder::build`]
//! folds an expired budget, an empty dictionary and an exhausted search into
//! `None`; [`SquareBuilder::try_build`] tells the budget case apart.

use crate::budget::Budget;
use crate::letters::{distinct_letters, letter_slot, ALPHABET_SIZE};
use crate::square::PartialSquare;
use crate::word_index::WordIndex;
use log::trace;
use std::collections::HashSet;

/// How a build attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// A complete square; its rows are also its columns.
    Square(Vec<String>),
    /// The search space was exhausted without a square.
    Exhausted,
    /// The budget expired before the search finished.
    OutOfBudget,
}

impl BuildOutcome {
    #[must_use]
    pub fn into_square(self) -> Option<Vec<String>> {
        match self {
            BuildOutcome::Square(rows) => Some(rows),
            BuildOutcome::Exhausted | BuildOutcome::OutOfBudget => None,
        }
    }
}

/// Result of one recursive step.
enum Search {
    Found,
    DeadEnd,
    Stopped,
}

/// Square builder for one word index and square size.
#[derive(Debug)]
pub struct SquareBuilder<'a> {
    index: &'a WordIndex,
    size: usize,
    /// All words of length `size`, in index order.
    words: Vec<&'a str>,
    /// The same words bucketed by first letter.
    by_first_letter: Vec<Vec<&'a str>>,
}

impl<'a> SquareBuilder<'a> {
    #[must_use]
    pub fn new(index: &'a WordIndex, size: usize) -> Self {
        let words: Vec<&'a str> = index.words_of_length(size).iter().map(String::as_str).collect();

        let mut by_first_letter: Vec<Vec<&'a str>> = vec![Vec::new(); ALPHABET_SIZE];
        for &word in &words {
            if let Some(slot) = word.bytes().next().and_then(letter_slot) {
                by_first_letter[slot].push(word);
            }
        }

        Self { index, size, words, by_first_letter }
    }

    /// Extend `first_row` to a complete square, or `None`.
    ///
    /// The returned rows are the solution; by symmetry they are also the columns.
    pub fn build(&self, first_row: &str, budget: &dyn Budget) -> Option<Vec<String>> {
        self.try_build(first_row, budget).into_square()
    }

    /// Like [`SquareBuilder::build`], but reports whether the budget cut the search short.
    pub fn try_build(&self, first_row: &str, budget: &dyn Budget) -> BuildOutcome {
        if self.words.is_empty() {
            return BuildOutcome::Exhausted;
        }
        let first_row = first_row.to_ascii_lowercase();
        if first_row.len() != self.size || letter_slots_invalid(&first_row) {
            return BuildOutcome::Exhausted;
        }

        let mut square = PartialSquare::new(self.size);
        let mut used: HashSet<&str> = HashSet::with_capacity(self.size);
        square.push(&first_row);
        used.insert(&first_row);

        match self.extend(&mut square, &mut used, budget) {
            Search::Found => BuildOutcome::Square(square.to_rows()),
            Search::DeadEnd => BuildOutcome::Exhausted,
            Search::Stopped => BuildOutcome::OutOfBudget,
        }
    }

    /// Recursive step: fill row `square.depth()`.
    fn extend<'r>(
        &self,
        square: &mut PartialSquare<'r>,
        used: &mut HashSet<&'r str>,
        budget: &dyn Budget,
    ) -> Search
    where
        'a: 'r,
    {
        let depth = square.depth();

        if square.is_full() {
            return if square.columns_are_words(self.index) && square.rows_are_distinct() {
                Search::Found
            } else {
                Search::DeadEnd
            };
        }

        if budget.expired() {
            return Search::Stopped;
        }

        if !square.columns_are_prefixes(self.index) {
            trace!("dead column prefix at depth {depth}");
            return Search::DeadEnd;
        }

        let candidates = self.candidates(square, used);
        if candidates.is_empty() {
            trace!("no candidates at depth {depth} under {:?}", square.rows());
            return Search::DeadEnd;
        }

        for candidate in candidates {
            square.push(candidate);
            used.insert(candidate);

            match self.extend(square, used, budget) {
                Search::Found => return Search::Found,
                Search::Stopped => return Search::Stopped,
                Search::DeadEnd => {}
            }

            used.remove(candidate);
            square.pop();
        }

        Search::DeadEnd
    }

    /// Ordered candidates for the next row.
    fn candidates<'r>(&self, square: &PartialSquare<'r>, used: &HashSet<&'r str>) -> Vec<&'a str>
    where
        'a: 'r,
    {
        let depth = square.depth();

        // row `depth` must start with column `depth` as read so far
        let fixed: Vec<u8> = (0..depth).map(|row| square.letter(row, depth)).collect();

        let pool: &[&'a str] = match fixed.first().copied().and_then(letter_slot) {
            Some(slot) => &self.by_first_letter[slot],
            None => &self.words,
        };

        let mut candidates: Vec<&'a str> = pool
            .iter()
            .copied()
            .filter(|word| !used.contains(word))
            .filter(|word| word.as_bytes().starts_with(&fixed))
            .filter(|word| square.extends_columns(self.index, word))
            .collect();

        // stable: equal counts keep dictionary order
        candidates.sort_by_key(|word| std::cmp::Reverse(distinct_letters(word)));
        candidates
    }
}

fn letter_slots_invalid(word: &str) -> bool {
    word.bytes().any(|b| letter_slot(b).is_none())
}
