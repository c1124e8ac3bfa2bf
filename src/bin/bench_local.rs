//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of puzzle generation on *your* machine.
//! - Loads the word list once, then generates one puzzle per seed (`bench|0`,
//!   `bench|1`, ...) several times over and reports the median per seed.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - More seeds, more repeats:       `cargo run --bin bench_local --release -- -n 50 -r 5`
//! - Print the puzzles:              `cargo run --bin bench_local --release -- -p`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Printing is kept outside the timed section.
//! - Generation is deterministic per seed, so repeats only measure noise.

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use tetrad::generator::{generate_puzzle, DEFAULT_MAX_RETRIES, DEFAULT_TIME_BUDGET_MS};
use tetrad::rng::SeededRng;
use tetrad::word_index::WordIndex;
use tetrad::word_list::WordList;

/// Simple local benchmark runner: load the word list once, time several seeds.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (`word` or `word;score` per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Minimum score filter
    #[arg(short = 'm', long, default_value_t = 0)]
    min_score: i32,

    /// Number of seeds to generate
    #[arg(short = 'n', long = "seeds", default_value_t = 20)]
    num_seeds: usize,

    /// Number of repeats per seed (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print each generated puzzle
    #[arg(short = 'p', long = "print")]
    print: bool,
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    eprintln!("tetrad {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    eprintln!("Loading word list from: {}", cli.word_list);
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list, cli.min_score)?;
    let index = WordIndex::new(&word_list.words);
    eprintln!("Loaded {} words in {:.3}s", index.len(), t_load.elapsed().as_secs_f64());

    let mut medians = Vec::with_capacity(cli.num_seeds);
    let mut found = 0;

    for i in 0..cli.num_seeds {
        let seed_text = format!("bench|{i}");
        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last = None;

        for _ in 0..cli.num_repeats.max(1) {
            let mut rng = SeededRng::from_text(black_box(&seed_text));
            let t_gen = Instant::now();
            let puzzle = generate_puzzle(&index, &mut rng, DEFAULT_MAX_RETRIES, DEFAULT_TIME_BUDGET_MS);
            times.push(t_gen.elapsed().as_secs_f64());
            last = black_box(puzzle);
        }

        let med = median(times);
        medians.push(med);

        match &last {
            Some(puzzle) => {
                found += 1;
                eprintln!("[{:02}] {seed_text:<10} {med:.3}s  {}", i + 1, puzzle.solution.join(" "));
                if cli.print {
                    println!("{}\n\n{puzzle}", puzzle.letters_string().to_ascii_uppercase());
                }
            }
            None => eprintln!("[{:02}] {seed_text:<10} {med:.3}s  ✗ no puzzle", i + 1),
        }
    }

    eprintln!("\n==== Summary ====");
    eprintln!(
        "{found}/{} {} produced a puzzle; median {:.3}s, max {:.3}s",
        cli.num_seeds,
        pluralizer(cli.num_seeds, "seed".into(), None),
        median(medians.clone()),
        medians.iter().copied().fold(0.0, f64::max),
    );

    Ok(())
}
