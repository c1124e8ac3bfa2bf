//! Integration tests for the Tetrad puzzle generator.
//!
//! These drive the public pipeline end to end (word list → index → seed →
//! generator) and check every returned puzzle against the properties a
//! player-facing puzzle must hold.

use std::collections::HashSet;

use tetrad::builder::SquareBuilder;
use tetrad::budget::Unlimited;
use tetrad::generator::{generate_puzzle, GenerateStatus, GeneratedPuzzle, GeneratorConfig, PuzzleGenerator};
use tetrad::rng::SeededRng;
use tetrad::seed::{hash_seed, SeedKey};
use tetrad::uniqueness::UniquenessValidator;
use tetrad::word_index::WordIndex;
use tetrad::word_list::WordList;

const FIXTURE: &str = "tests/fixtures/four_letter_words.txt";
const GENEROUS_MS: u64 = 10_000;

fn load_fixture_index() -> WordIndex {
    let word_list = WordList::load_from_path(FIXTURE, 0).expect("Failed to read fixture word list");
    WordIndex::new(&word_list.words)
}

/// Check every structural property of a returned puzzle.
fn assert_well_formed(index: &WordIndex, puzzle: &GeneratedPuzzle) {
    let n = puzzle.size();
    let rows: Vec<&[u8]> = puzzle.solution.iter().map(|r| r.as_bytes()).collect();

    for r in 0..n {
        assert_eq!(rows[r].len(), n);
        for c in 0..n {
            assert_eq!(rows[r][c], rows[c][r], "asymmetric at ({r},{c})");
        }
    }

    let distinct: HashSet<&String> = puzzle.solution.iter().collect();
    assert_eq!(distinct.len(), n, "rows must be distinct");

    for word in puzzle.solution.iter().chain(puzzle.columns().iter()) {
        assert!(index.contains(word), "{word} is not in the index");
    }

    let mut bag = puzzle.letters.clone();
    bag.sort_unstable();
    let mut solution_letters: Vec<char> = puzzle.solution.iter().flat_map(|r| r.chars()).collect();
    solution_letters.sort_unstable();
    assert_eq!(bag, solution_letters);

    assert!(UniquenessValidator::new(index, n).is_unique_solution(&puzzle.letters));
    assert_eq!(puzzle.dictionary_fingerprint, index.fingerprint());
}

#[cfg(test)]
mod word_lists {
    use super::*;

    #[test]
    fn test_fixture_is_cleaned() {
        let word_list = WordList::load_from_path(FIXTURE, 0).unwrap();
        assert!(word_list.words.contains(&"ball".to_string()));
        assert!(word_list.words.contains(&"cat".to_string()));
        assert_eq!(word_list.words.iter().filter(|w| *w == "lead").count(), 1);
        assert!(!word_list.words.contains(&"zzzz".to_string()));
        assert!(!word_list.words.iter().any(|w| w.contains('-')));
    }

    #[test]
    fn test_min_score_drops_low_words() {
        let word_list = WordList::load_from_path(FIXTURE, 30).unwrap();
        assert!(!word_list.words.contains(&"arae".to_string()));
        assert!(!word_list.words.contains(&"intu".to_string()));
        // unscored lines always survive
        assert!(word_list.words.contains(&"cat".to_string()));
    }

    #[test]
    fn test_index_ignores_file_order() {
        let a = WordIndex::new(&WordList::parse_from_str("lady\nball\narea\nlead", 0).words);
        let b = WordIndex::new(&WordList::parse_from_str("lead\narea\nlady\nball", 0).words);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }
}

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn test_star_square_is_consistent() {
        let index = WordIndex::new(["star", "tare", "area", "read"]);
        let builder = SquareBuilder::new(&index, 4);
        if let Some(rows) = builder.build("star", &Unlimited) {
            assert_eq!(rows, ["star", "tare", "area", "read"]);
        }

        let puzzle = generate_puzzle(&index, &mut SeededRng::new(17), 10, GENEROUS_MS).unwrap();
        assert_well_formed(&index, &puzzle);
    }

    #[test]
    fn test_single_word_has_no_puzzle() {
        let index = WordIndex::new(["aaaa"]);
        assert!(generate_puzzle(&index, &mut SeededRng::new(1), 250, GENEROUS_MS).is_none());
    }

    #[test]
    fn test_non_square_words_give_no_puzzle() {
        // able forces bole, then row 2 must start "ll"; else forces love, then "sv";
        // nothing starts with the "o" that bole and love need next
        let index = WordIndex::new(["ABLE", "BOLE", "LOVE", "ELSE"]);
        let builder = SquareBuilder::new(&index, 4);
        for start in ["able", "bole", "love", "else"] {
            assert!(builder.build(start, &Unlimited).is_none(), "{start} should not complete");
        }

        let mut generator = PuzzleGenerator::new(&index, GeneratorConfig::new(10, GENEROUS_MS)).unwrap();
        let result = generator.generate_detailed(&mut SeededRng::new(2));
        assert!(result.puzzle.is_none());
        assert_eq!(result.status, GenerateStatus::CandidatesExhausted);
        assert_eq!(result.attempts, 4);
    }

    #[test]
    fn test_ambiguous_family_is_skipped() {
        let index = load_fixture_index();

        // the ball family builds a square, but its bag has two arrangements
        let builder = SquareBuilder::new(&index, 4);
        let ball_square = builder.build("ball", &Unlimited).unwrap();
        let bag: Vec<char> = ball_square.iter().flat_map(|r| r.chars()).collect();
        assert!(!UniquenessValidator::new(&index, 4).is_unique_solution(&bag));

        for seed in 0..8 {
            let puzzle = generate_puzzle(&index, &mut SeededRng::new(seed), 250, GENEROUS_MS)
                .expect("the chim family is unique");
            assert_eq!(puzzle.solution, ["chim", "honk", "intu", "mkus"]);
            assert_well_formed(&index, &puzzle);
        }
    }

    #[test]
    fn test_daily_seed_is_reproducible() {
        let key = SeedKey::daily("TETRAD_v1", "2025-01-01").unwrap();
        assert_eq!(key.seed(), hash_seed(b"TETRAD_v1|2025-01-01"));
        assert_eq!(key.seed(), SeedKey::text("TETRAD_v1|2025-01-01").seed());

        let index = WordIndex::new(["ball", "area", "lead", "lady"]);
        let a = generate_puzzle(&index, &mut SeededRng::from_key(&key), 10, GENEROUS_MS);
        let b = generate_puzzle(&index, &mut SeededRng::from_key(&key), 10, GENEROUS_MS);
        assert!(a.is_some());
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod properties {
    use super::*;

    #[test]
    fn test_fixture_puzzles_are_well_formed() {
        let index = load_fixture_index();
        for day in 1..=10 {
            let key = SeedKey::daily("TETRAD_v1", &format!("2025-03-{day:02}")).unwrap();
            if let Some(puzzle) = generate_puzzle(&index, &mut SeededRng::from_key(&key), 250, GENEROUS_MS) {
                assert_well_formed(&index, &puzzle);
            }
        }
    }

    #[test]
    fn test_zero_budget_returns_promptly() {
        let index = load_fixture_index();
        let started = std::time::Instant::now();
        assert!(generate_puzzle(&index, &mut SeededRng::new(5), 250, 0).is_none());
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_empty_word_list() {
        let index = WordIndex::new(&WordList::parse_from_str("", 0).words);
        assert!(index.is_empty());
        assert!(index.words_of_length(4).is_empty());
        assert!(generate_puzzle(&index, &mut SeededRng::new(5), 250, GENEROUS_MS).is_none());
    }

    #[test]
    fn test_two_by_two_puzzles() {
        let index = load_fixture_index();
        let config = GeneratorConfig { size: 2, ..GeneratorConfig::new(10, GENEROUS_MS) };
        let mut generator = PuzzleGenerator::new(&index, config).unwrap();
        let result = generator.generate_detailed(&mut SeededRng::new(3));
        assert_eq!(result.status, GenerateStatus::Found);
        let puzzle = result.puzzle.unwrap();
        assert_eq!(puzzle.solution, ["an", "no"]);
        assert_well_formed(&index, &puzzle);
    }

    #[test]
    fn test_dictionary_folding_changes_seed() {
        let key = SeedKey::level("forest", 3, 0);
        let small = WordIndex::new(["ball", "area", "lead", "lady"]);
        let large = load_fixture_index();
        assert_ne!(key.seed_for_dictionary(&small), key.seed_for_dictionary(&large));
        assert_ne!(key.seed_for_dictionary(&small), key.seed());
        assert_eq!(key.seed_for_dictionary(&small), key.seed_for_dictionary(&small));
    }

    #[test]
    fn test_reused_generator_never_repeats_a_bag() {
        let index = load_fixture_index();
        let mut generator = PuzzleGenerator::new(&index, GeneratorConfig::new(250, GENEROUS_MS)).unwrap();
        let mut rng = SeededRng::new(99);
        assert!(generator.generate(&mut rng).is_some());
        assert!(generator.generate(&mut rng).is_none());
    }
}
