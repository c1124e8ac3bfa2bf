use clap::{ArgGroup, Parser};
use std::process::ExitCode;
use std::time::Instant;

use tetrad::errors::ConfigError;
use tetrad::generator::{
    GenerateStatus, GeneratorConfig, PuzzleGenerator, DEFAULT_MAX_RETRIES, DEFAULT_SQUARE_SIZE,
    DEFAULT_TIME_BUDGET_MS,
};
use tetrad::rng::SeededRng;
use tetrad::seed::{SeedKey, DEFAULT_VERSION_TAG};
use tetrad::word_index::WordIndex;
use tetrad::word_list::WordList;

/// Tetrad word-square puzzle generator
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None,
    group(ArgGroup::new("source").required(true).args(["seed", "daily", "world"]))
)]
struct Cli {
    /// Path to the word list file (`word` or `word;score` per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Minimum score filter (only applies to scored lines)
    #[arg(short = 'm', long, default_value_t = 0)]
    min_score: i32,

    /// Free-form seed text
    #[arg(long)]
    seed: Option<String>,

    /// Daily puzzle for this UTC date (YYYY-MM-DD)
    #[arg(long, value_name = "YYYY-MM-DD")]
    daily: Option<String>,

    /// Version tag mixed into daily seeds
    #[arg(long, default_value = DEFAULT_VERSION_TAG, requires = "daily")]
    tag: String,

    /// World of a level puzzle
    #[arg(long, requires = "level")]
    world: Option<String>,

    /// Level number within the world
    #[arg(long, requires = "world")]
    level: Option<u32>,

    /// Salt for re-rolling a level
    #[arg(long, default_value_t = 0, requires = "world")]
    salt: u64,

    /// Fold the dictionary fingerprint into the seed
    #[arg(long)]
    fold_dictionary: bool,

    /// Square side length
    #[arg(short, long, default_value_t = DEFAULT_SQUARE_SIZE)]
    size: usize,

    /// Maximum number of start words to try
    #[arg(short = 'r', long, default_value_t = DEFAULT_MAX_RETRIES)]
    max_retries: usize,

    /// Wall-clock budget in milliseconds
    #[arg(short = 't', long, default_value_t = DEFAULT_TIME_BUDGET_MS)]
    time_budget_ms: u64,
}

impl Cli {
    fn seed_key(&self) -> Result<SeedKey, ConfigError> {
        if let Some(date) = &self.daily {
            return SeedKey::daily(&self.tag, date);
        }
        if let (Some(world), Some(level)) = (&self.world, self.level) {
            return Ok(SeedKey::level(world, level, self.salt));
        }
        Ok(SeedKey::text(self.seed.as_deref().unwrap_or_default()))
    }
}

/// Entry point of the Tetrad CLI.
///
/// Delegates to [`try_main`]; errors are printed to stderr and exit with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("TETRAD_DEBUG").is_ok();
    tetrad::log::init_logger(debug_enabled);

    match try_main() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            if let Some(config_err) = e.downcast_ref::<ConfigError>() {
                eprintln!("Error: {}", config_err.display_detailed());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Core application logic.
///
/// 1. Parse CLI arguments and build the seed key.
/// 2. Load the word list and index it.
/// 3. Generate one puzzle.
/// 4. Print the bag and grid on stdout, diagnostics on stderr.
///
/// Returns whether a puzzle was produced.
fn try_main() -> Result<bool, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let key = cli.seed_key()?;
    let config = GeneratorConfig {
        size: cli.size,
        max_retries: cli.max_retries,
        time_budget: std::time::Duration::from_millis(cli.time_budget_ms),
        ..GeneratorConfig::default()
    };
    config.validate()?;

    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list, cli.min_score)?;
    if word_list.is_empty() {
        log::warn!("word list {} has no usable words", cli.word_list);
    }
    let index = WordIndex::new(&word_list.words);
    let load_secs = t_load.elapsed().as_secs_f64();

    let seed = if cli.fold_dictionary { key.seed_for_dictionary(&index) } else { key.seed() };
    log::debug!("seed key {key} -> {seed:#018x}");

    let mut generator = PuzzleGenerator::new(&index, config)?;
    let mut rng = SeededRng::new(seed);
    let result = generator.generate_detailed(&mut rng);

    if let Some(puzzle) = &result.puzzle {
        println!("{}", puzzle.letters_string().to_ascii_uppercase());
        println!();
        print!("{puzzle}");
    }

    match result.status {
        GenerateStatus::Found => eprintln!("✓ Puzzle found for \"{key}\""),
        GenerateStatus::NoCandidateWords => {
            eprintln!("✗ No {}-letter words in {}", cli.size, cli.word_list);
        }
        GenerateStatus::CandidatesExhausted => eprintln!("✗ Every start word tried; no unique square"),
        GenerateStatus::RetriesExhausted => {
            eprintln!("✗ No unique square within {} start words", cli.max_retries);
        }
        GenerateStatus::TimedOut => {
            eprintln!("⚠️  Timed out after {:.3}s without a puzzle", result.elapsed.as_secs_f64());
        }
    }

    eprintln!(
        "Loaded {} words ({} indexed) in {:.3}s; generated in {:.3}s ({} attempts); dictionary {:016x}.",
        word_list.len(),
        index.len(),
        load_secs,
        result.elapsed.as_secs_f64(),
        result.attempts,
        index.fingerprint(),
    );

    Ok(result.puzzle.is_some())
}
