use crate::errors::ConfigError;
use crate::generator::{GenerateStatus, GeneratorConfig, PuzzleGenerator};
use crate::log::init_logger;
use crate::rng::SeededRng;
use crate::seed::SeedKey;
use crate::word_index::WordIndex;
use crate::word_list::WordList;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "C003", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<ConfigError> for WasmError {
    fn from(e: ConfigError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(what: &str, e: &serde_wasm_bindgen::Error, code: &str) -> WasmError {
    WasmError {
        code: code.to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
}

/// Initialize Tetrad logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmGenerateResult {
    /// Shuffled letters, one string per letter; empty when nothing was found.
    letters: Vec<String>,
    /// Solution rows; empty when nothing was found.
    solution: Vec<String>,
    status: &'static str,
    attempts: usize,
    elapsed_ms: f64,
    /// Hex fingerprint of the dictionary the puzzle came from.
    dictionary_fingerprint: String,
}

fn status_name(status: GenerateStatus) -> &'static str {
    match status {
        GenerateStatus::Found => "found",
        GenerateStatus::NoCandidateWords => "no_candidate_words",
        GenerateStatus::CandidatesExhausted => "candidates_exhausted",
        GenerateStatus::RetriesExhausted => "retries_exhausted",
        GenerateStatus::TimedOut => "timed_out",
    }
}

/// JS entry: (words: string[], seed_text: string, max_retries: number, time_budget_ms: number)
/// returns `{ letters, solution, status, attempts, elapsed_ms, dictionary_fingerprint }`
#[wasm_bindgen]
pub fn generate_puzzle_wasm(
    words: JsValue,
    seed_text: &str,
    max_retries: usize,
    time_budget_ms: u32,
) -> Result<JsValue, JsValue> {
    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid word-list format".to_string(),
        details: "The words parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Ensure you're passing a valid string array, e.g., ['ball', 'area', 'lead', 'lady']".to_string()),
    })?;

    let index = WordIndex::new(&words);
    let config = GeneratorConfig::new(max_retries, u64::from(time_budget_ms));
    let mut generator = PuzzleGenerator::new(&index, config).map_err(WasmError::from)?;
    let mut rng = SeededRng::from_text(seed_text);

    let result = generator.generate_detailed(&mut rng);
    let (letters, solution) = match result.puzzle {
        Some(puzzle) => (
            puzzle.letters.iter().map(char::to_string).collect(),
            puzzle.solution,
        ),
        None => (Vec::new(), Vec::new()),
    };

    let wasm_result = WasmGenerateResult {
        letters,
        solution,
        status: status_name(result.status),
        attempts: result.attempts,
        elapsed_ms: result.elapsed.as_secs_f64() * 1000.0,
        dictionary_fingerprint: format!("{:016x}", index.fingerprint()),
    };

    to_value(&wasm_result).map_err(|e| serialization_error("generator result", &e, "WASM002").into())
}

/// Canonical seed text for a daily puzzle, e.g. `"TETRAD_v1|2025-01-01"`.
///
/// # Errors
/// Returns a `JsValue` error if the tag is empty or the date is not `YYYY-MM-DD`.
#[wasm_bindgen]
pub fn daily_seed_key(tag: &str, date: &str) -> Result<String, JsValue> {
    let key = SeedKey::daily(tag, date).map_err(WasmError::from)?;
    Ok(key.canonical())
}

/// Parse a newline-separated word list (`word` or `word;score` per line).
///
/// Returns the surviving words as a `JsValue` array of strings.
///
/// # Errors
/// Returns a `JsValue` error if the result cannot be serialized.
#[wasm_bindgen]
pub fn parse_word_list(text: &str, min_score: i32) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text, min_score);
    to_value(&word_list.words).map_err(|e| serialization_error("word list", &e, "WASM003").into())
}
