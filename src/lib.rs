//! Tetrad: seeded generation of word-square puzzles.
//!
//! A puzzle is an `n × n` grid whose rows and columns read the same words, handed
//! to the player as a shuffled bag of its `n²` letters. The generator only emits
//! bags that admit exactly one square under the dictionary it was built from.
//!
//! The pieces, bottom-up:
//! - [`word_list`] loads and cleans a dictionary file.
//! - [`word_index`] answers prefix and membership queries.
//! - [`seed`] and [`rng`] turn a date or level key into a reproducible stream.
//! - [`builder`] fills a symmetric square from a first row.
//! - [`uniqueness`] counts the squares a letter bag admits.
//! - [`generator`] ties them together.

// Reusable library API: visible to both CLI and WASM builds
pub mod budget;
pub mod builder;
pub mod errors;
pub mod generator;
pub mod letters;
pub mod log;
pub mod rng;
pub mod seed;
mod square;
pub mod uniqueness;
pub mod word_index;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use generator::{generate_puzzle, GeneratedPuzzle, GeneratorConfig, PuzzleGenerator};
pub use rng::SeededRng;
pub use seed::SeedKey;
pub use word_index::WordIndex;
