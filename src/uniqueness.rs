//! Uniqueness validator: does a letter bag admit exactly one square?
//!
//! Rows are placed one at a time, each drawn from the bag's remaining letters,
//! with column prefixes pruned against the word index. A full grid counts as a
//! solution when every column is a complete word. Rows and columns are checked
//! independently here, so a non-symmetric double square (and its transpose)
//! also counts: the player could build it from the same bag.
//!
//! The search stops as soon as `cap` solutions are found; "exactly one" only
//! needs to be told apart from "more than one".

use crate::letters::LetterCounts;
use crate::square::PartialSquare;
use crate::word_index::WordIndex;

/// Default early-exit cap for the solution counter.
pub const DEFAULT_SOLUTION_CAP: usize = 2;

/// A length-`size` word together with its letter counts.
struct ViableWord<'a> {
    word: &'a str,
    counts: LetterCounts,
}

/// Uniqueness checks for one word index and square size.
#[derive(Debug, Clone, Copy)]
pub struct UniquenessValidator<'a> {
    index: &'a WordIndex,
    size: usize,
}

impl<'a> UniquenessValidator<'a> {
    #[must_use]
    pub fn new(index: &'a WordIndex, size: usize) -> Self {
        Self { index, size }
    }

    /// True iff exactly one square uses every letter of `bag` exactly once.
    #[must_use]
    pub fn is_unique_solution(&self, bag: &[char]) -> bool {
        self.is_unique_solution_with_cap(bag, DEFAULT_SOLUTION_CAP)
    }

    /// Same as [`UniquenessValidator::is_unique_solution`] with an explicit cap.
    ///
    /// Caps below 2 are raised to 2; with a cap of 1 the answer would always be "unique".
    #[must_use]
    pub fn is_unique_solution_with_cap(&self, bag: &[char], cap: usize) -> bool {
        self.count_solutions(bag, cap.max(DEFAULT_SOLUTION_CAP)) == 1
    }

    /// Count squares buildable from `bag`, stopping at `cap`.
    ///
    /// A bag with the wrong number of letters, or with anything other than
    /// ASCII letters, has no solutions.
    #[must_use]
    pub fn count_solutions(&self, bag: &[char], cap: usize) -> usize {
        if cap == 0 || self.size == 0 || bag.len() != self.size * self.size {
            return 0;
        }
        let Some(mut remaining) = LetterCounts::from_chars(bag.iter().copied()) else {
            return 0;
        };

        let viable = self.viable_words(&remaining);
        if viable.is_empty() {
            return 0;
        }

        let mut square = PartialSquare::new(self.size);
        let mut found = 0;
        self.place_rows(&viable, &mut remaining, &mut square, &mut found, cap);
        log::trace!("bag {:?}: {found} solution(s) (cap {cap})", bag.iter().collect::<String>());
        found
    }

    /// Length-`size` words whose letters can all be drawn from `bag`.
    fn viable_words(&self, bag: &LetterCounts) -> Vec<ViableWord<'a>> {
        self.index
            .words_of_length(self.size)
            .iter()
            .filter_map(|word| {
                let counts = LetterCounts::from_word(word)?;
                bag.covers(&counts).then_some(ViableWord { word: word.as_str(), counts })
            })
            .collect()
    }

    fn place_rows(
        &self,
        viable: &[ViableWord<'a>],
        remaining: &mut LetterCounts,
        square: &mut PartialSquare<'a>,
        found: &mut usize,
        cap: usize,
    ) {
        if square.is_full() {
            if square.columns_are_words(self.index) {
                *found += 1;
            }
            return;
        }

        for candidate in viable {
            if *found >= cap {
                return;
            }
            if !remaining.try_take(&candidate.counts) {
                continue;
            }

            square.push(candidate.word);
            if square.columns_are_prefixes(self.index) {
                self.place_rows(viable, remaining, square, found, cap);
            }
            square.pop();
            remaining.put_back(&candidate.counts);
        }
    }
}
