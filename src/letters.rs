use std::ops::RangeInclusive;

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<u8> = b'a'..=b'z';

/// Map an ASCII letter (either case) to its slot `0..26`.
#[inline]
pub(crate) fn letter_slot(b: u8) -> Option<usize> {
    let lower = b.to_ascii_lowercase();
    if LOWERCASE_ALPHABET.contains(&lower) {
        Some((lower - b'a') as usize)
    } else {
        None
    }
}

/// Number of distinct letters in `word`.
///
/// Used as the candidate-ordering heuristic in the square builder.
pub(crate) fn distinct_letters(word: &str) -> usize {
    let mut seen = [false; ALPHABET_SIZE];
    word.bytes()
        .filter_map(letter_slot)
        .filter(|&i| !std::mem::replace(&mut seen[i], true))
        .count()
}

/// A multiset of lowercase letters, stored as 26 counters.
///
/// Square sizes are capped well below the point where a single letter
/// could appear more than `u8::MAX` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCounts {
    counts: [u8; ALPHABET_SIZE],
}

impl LetterCounts {
    /// Count the letters of `letters`; `None` if any character is not an ASCII letter.
    pub fn from_chars<I: IntoIterator<Item = char>>(letters: I) -> Option<Self> {
        let mut out = Self::default();
        for c in letters {
            let b = u8::try_from(c).ok()?;
            let i = letter_slot(b)?;
            out.counts[i] = out.counts[i].checked_add(1)?;
        }
        Some(out)
    }

    /// Count the letters of a word.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::from_chars(word.chars())
    }

    /// True iff every letter of `other` is available here at least as many times.
    #[must_use]
    pub fn covers(&self, other: &LetterCounts) -> bool {
        self.counts.iter().zip(other.counts.iter()).all(|(have, need)| have >= need)
    }

    /// Remove `other` from this multiset if it is fully covered.
    ///
    /// Returns false (leaving `self` untouched) when some letter is short.
    pub fn try_take(&mut self, other: &LetterCounts) -> bool {
        if !self.covers(other) {
            return false;
        }
        for (have, need) in self.counts.iter_mut().zip(other.counts.iter()) {
            *have -= need;
        }
        true
    }

    /// Undo a successful [`LetterCounts::try_take`].
    pub fn put_back(&mut self, other: &LetterCounts) {
        for (have, returned) in self.counts.iter_mut().zip(other.counts.iter()) {
            *have += returned;
        }
    }

    /// The letters in alphabetical order, one char per copy.
    #[must_use]
    pub fn sorted_letters(&self) -> String {
        self.counts
            .iter()
            .zip(LOWERCASE_ALPHABET)
            .flat_map(|(&n, b)| std::iter::repeat(b as char).take(n as usize))
            .collect()
    }
}
