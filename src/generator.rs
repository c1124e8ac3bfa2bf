//! The puzzle assembler: seeded start words → square → shuffled bag → uniqueness proof.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use tetrad::generator::generate_puzzle;
//! use tetrad::rng::SeededRng;
//! use tetrad::word_index::WordIndex;
//!
//! let index = WordIndex::new(["ball", "area", "lead", "lady"]);
//! let mut rng = SeededRng::from_text("TETRAD_v1|2025-01-01");
//!
//! let puzzle = generate_puzzle(&index, &mut rng, 10, 1_000).expect("square exists");
//! assert_eq!(puzzle.solution, ["ball", "area", "lead", "lady"]);
//! assert_eq!(puzzle.letters.len(), 16);
//! ```
//!
//! ## Checking Generation Status
//!
//! ```
//! use tetrad::generator::{GenerateStatus, GeneratorConfig, PuzzleGenerator};
//! use tetrad::rng::SeededRng;
//! use tetrad::word_index::WordIndex;
//!
//! let index = WordIndex::new(["aaaa"]);
//! let mut generator = PuzzleGenerator::new(&index, GeneratorConfig::default())?;
//! let result = generator.generate_detailed(&mut SeededRng::new(7));
//!
//! assert!(result.puzzle.is_none());
//! assert_eq!(result.status, GenerateStatus::CandidatesExhausted);
//! # Ok::<(), tetrad::errors::ConfigError>(())
//! ```
//!
//! Given the same word list, seed and configuration, the output is identical on
//! every run, as long as the time budget does not run out first.

use crate::budget::{Budget, TimeBudget};
use crate::builder::{BuildOutcome, SquareBuilder};
use crate::errors::ConfigError;
use crate::letters::LetterCounts;
use crate::rng::SeededRng;
use crate::uniqueness::{UniquenessValidator, DEFAULT_SOLUTION_CAP};
use crate::word_index::WordIndex;
use instant::Instant;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};
use std::time::Duration;

/// Default square size.
pub const DEFAULT_SQUARE_SIZE: usize = 4;
/// Largest square the generator accepts.
pub const MAX_SQUARE_SIZE: usize = 12;
/// Start words tried per call, by default.
pub const DEFAULT_MAX_RETRIES: usize = 250;
/// Wall-clock budget per call, by default.
pub const DEFAULT_TIME_BUDGET_MS: u64 = 2_000;

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Square side length `n`.
    pub size: usize,
    /// Maximum number of start words tried.
    pub max_retries: usize,
    /// Wall-clock budget shared by all attempts of one call.
    pub time_budget: Duration,
    /// Early-exit cap of the uniqueness check.
    pub solution_cap: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SQUARE_SIZE,
            max_retries: DEFAULT_MAX_RETRIES,
            time_budget: Duration::from_millis(DEFAULT_TIME_BUDGET_MS),
            solution_cap: DEFAULT_SOLUTION_CAP,
        }
    }
}

impl GeneratorConfig {
    /// Default-size configuration with the given retry and time budgets.
    #[must_use]
    pub fn new(max_retries: usize, time_budget_ms: u64) -> Self {
        Self {
            max_retries,
            time_budget: Duration::from_millis(time_budget_ms),
            ..Self::default()
        }
    }

    /// Check the settings can drive a search.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidSize`] or [`ConfigError::InvalidSolutionCap`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SQUARE_SIZE).contains(&self.size) {
            return Err(ConfigError::InvalidSize { size: self.size });
        }
        if self.solution_cap < DEFAULT_SOLUTION_CAP {
            return Err(ConfigError::InvalidSolutionCap { cap: self.solution_cap });
        }
        Ok(())
    }
}

/// A generated puzzle: the shuffled letter bag and its one solution.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GeneratedPuzzle {
    /// The `n²` letters in player-facing (shuffled) order.
    pub letters: Vec<char>,
    /// The `n` rows of the solution; by symmetry also its columns.
    pub solution: Vec<String>,
    /// Fingerprint of the word index the puzzle was generated from.
    pub dictionary_fingerprint: u64,
}

impl GeneratedPuzzle {
    /// Side length of the square.
    #[must_use]
    pub fn size(&self) -> usize {
        self.solution.len()
    }

    /// The solution read column by column.
    #[must_use]
    pub fn columns(&self) -> Vec<String> {
        (0..self.size())
            .map(|c| self.solution.iter().filter_map(|row| row.chars().nth(c)).collect())
            .collect()
    }

    /// Order-independent identity of the bag: its letters sorted.
    #[must_use]
    pub fn signature(&self) -> String {
        bag_signature(&self.letters)
    }

    /// The bag as a single string, in shuffled order.
    #[must_use]
    pub fn letters_string(&self) -> String {
        self.letters.iter().collect()
    }
}

impl Display for GeneratedPuzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.solution {
            writeln!(f, "{}", row.to_ascii_uppercase())?;
        }
        Ok(())
    }
}

/// Sorted letters of a bag.
fn bag_signature(letters: &[char]) -> String {
    LetterCounts::from_chars(letters.iter().copied()).map_or_else(
        || {
            let mut sorted = letters.to_vec();
            sorted.sort_unstable();
            sorted.into_iter().collect()
        },
        |counts| counts.sorted_letters(),
    )
}

/// Why a generation call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateStatus {
    /// A puzzle was produced.
    Found,
    /// The index holds no words of the requested length.
    NoCandidateWords,
    /// Every start word was tried without success.
    CandidatesExhausted,
    /// `max_retries` start words were tried without success.
    RetriesExhausted,
    /// The budget expired before a puzzle was found.
    TimedOut,
}

/// Result of a generation call, with diagnostics.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub puzzle: Option<GeneratedPuzzle>,
    pub status: GenerateStatus,
    /// Start words tried.
    pub attempts: usize,
    pub elapsed: Duration,
}

/// Puzzle assembler bound to one word index.
///
/// Remembers the bag signatures it has returned, so repeated calls on the same
/// generator never hand out two bag-equivalent puzzles.
#[derive(Debug)]
pub struct PuzzleGenerator<'a> {
    index: &'a WordIndex,
    config: GeneratorConfig,
    seen: HashSet<String>,
}

impl<'a> PuzzleGenerator<'a> {
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`GeneratorConfig::validate`].
    pub fn new(index: &'a WordIndex, config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { index, config, seen: HashSet::new() })
    }

    /// Generate a puzzle, or `None` once retries or time run out.
    pub fn generate(&mut self, rng: &mut SeededRng) -> Option<GeneratedPuzzle> {
        self.generate_detailed(rng).puzzle
    }

    /// Generate under the configured wall-clock budget, reporting why the call ended.
    pub fn generate_detailed(&mut self, rng: &mut SeededRng) -> GenerateResult {
        let budget = TimeBudget::new(self.config.time_budget);
        let result = self.generate_within(rng, &budget);
        debug!("{} ms of the time budget left", budget.remaining().as_millis());
        result
    }

    /// Generate under a caller-supplied budget (the configured time budget is ignored).
    pub fn generate_within(&mut self, rng: &mut SeededRng, budget: &dyn Budget) -> GenerateResult {
        let started = Instant::now();
        let size = self.config.size;

        let mut start_words: Vec<&str> =
            self.index.words_of_length(size).iter().map(String::as_str).collect();
        if start_words.is_empty() {
            debug!("no {size}-letter words in the index");
            return GenerateResult {
                puzzle: None,
                status: GenerateStatus::NoCandidateWords,
                attempts: 0,
                elapsed: started.elapsed(),
            };
        }
        rng.shuffle(&mut start_words);

        let builder = SquareBuilder::new(self.index, size);
        let validator = UniquenessValidator::new(self.index, size);
        let mut attempts = 0;
        let mut timed_out = false;

        for start in start_words.iter().take(self.config.max_retries) {
            if budget.expired() {
                timed_out = true;
                break;
            }
            attempts += 1;

            let solution = match builder.try_build(start, budget) {
                BuildOutcome::Square(rows) => rows,
                BuildOutcome::Exhausted => {
                    debug!("attempt {attempts}: no square from {start:?}");
                    continue;
                }
                BuildOutcome::OutOfBudget => {
                    timed_out = true;
                    break;
                }
            };

            let mut letters: Vec<char> = solution.iter().flat_map(|row| row.chars()).collect();
            rng.shuffle(&mut letters);

            if !validator.is_unique_solution_with_cap(&letters, self.config.solution_cap) {
                debug!("attempt {attempts}: bag for {solution:?} has more than one square");
                continue;
            }

            let puzzle = GeneratedPuzzle {
                letters,
                solution,
                dictionary_fingerprint: self.index.fingerprint(),
            };
            if !self.seen.insert(puzzle.signature()) {
                debug!("attempt {attempts}: bag for {:?} was already returned", puzzle.solution);
                continue;
            }

            info!("puzzle found after {attempts} attempt(s): {:?}", puzzle.solution);
            return GenerateResult {
                puzzle: Some(puzzle),
                status: GenerateStatus::Found,
                attempts,
                elapsed: started.elapsed(),
            };
        }

        let status = if timed_out {
            warn!("budget expired after {attempts} attempt(s) without a puzzle");
            GenerateStatus::TimedOut
        } else if attempts < start_words.len() {
            GenerateStatus::RetriesExhausted
        } else {
            GenerateStatus::CandidatesExhausted
        };
        debug!("no puzzle: {status:?} after {attempts} attempt(s)");

        GenerateResult { puzzle: None, status, attempts, elapsed: started.elapsed() }
    }
}

/// Generate one default-size puzzle from `index`.
///
/// `max_retries` bounds the start words tried and `time_budget_ms` the
/// wall-clock time of the whole call. Returns `None` when either runs out.
pub fn generate_puzzle(
    index: &WordIndex,
    rng: &mut SeededRng,
    max_retries: usize,
    time_budget_ms: u64,
) -> Option<GeneratedPuzzle> {
    let config = GeneratorConfig::new(max_retries, time_budget_ms);
    // the default size and cap always validate
    let mut generator = PuzzleGenerator { index, config, seen: HashSet::new() };
    generator.generate(rng)
}
