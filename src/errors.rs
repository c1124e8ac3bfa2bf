//! Configuration errors with error codes and helpful messages.
//!
//! The generation engine itself never fails with an error: it reports
//! "nothing found" instead. Errors only arise where callers hand in settings
//! or seed material that cannot be used at all.
//!
//! # Error Codes
//!
//! - C001: `InvalidSize` (Square size out of range)
//! - C002: `InvalidSolutionCap` (Uniqueness cap below 2)
//! - C003: `InvalidDate` (Daily seed date is not YYYY-MM-DD)
//! - C004: `EmptyVersionTag` (Daily seed without a version tag)
//!
//! # Examples
//!
//! ```
//! use tetrad::errors::ConfigError;
//! use tetrad::seed::SeedKey;
//!
//! match SeedKey::daily("TETRAD_v1", "01/02/2025") {
//!     Err(e) => {
//!         assert_eq!(e.code(), "C003");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use crate::generator::MAX_SQUARE_SIZE;

/// Invalid generator settings or seed material.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid square size: {size} (must be between 1 and {max})", max = MAX_SQUARE_SIZE)]
    InvalidSize { size: usize },

    #[error("Invalid uniqueness cap: {cap} (must be at least 2)")]
    InvalidSolutionCap { cap: usize },

    #[error("Invalid date: \"{input}\"")]
    InvalidDate { input: String },

    #[error("Empty version tag")]
    EmptyVersionTag,
}

impl ConfigError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidSize { .. } => "C001",
            ConfigError::InvalidSolutionCap { .. } => "C002",
            ConfigError::InvalidDate { .. } => "C003",
            ConfigError::EmptyVersionTag => "C004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ConfigError::InvalidSize { .. } => "Square size out of range",
            ConfigError::InvalidSolutionCap { .. } => "Uniqueness cap below 2",
            ConfigError::InvalidDate { .. } => "Daily seed date is not YYYY-MM-DD",
            ConfigError::EmptyVersionTag => "Daily seed without a version tag",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ConfigError::InvalidSize { .. } => "The generator fills n×n squares for 1 ≤ n ≤ 12. Larger squares need more letters than the bag counters hold and are far outside what the search can finish in an interactive budget.",
            ConfigError::InvalidSolutionCap { .. } => "The uniqueness check stops counting once it reaches the cap. With a cap below 2 it can never see a second solution, so every bag would look unique.",
            ConfigError::InvalidDate { .. } => "Daily puzzles are keyed by a UTC calendar date written as YYYY-MM-DD. Any other spelling would hash to a different seed and break reproducibility.",
            ConfigError::EmptyVersionTag => "The version tag is part of the daily seed. Without it, puzzles from different releases could not be told apart.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidSize { .. } => Some("Use the default size of 4, or any size from 1 to 12"),
            ConfigError::InvalidSolutionCap { .. } => Some("Use the default cap of 2"),
            ConfigError::InvalidDate { .. } => Some("Example: 2025-01-01"),
            ConfigError::EmptyVersionTag => Some("Example: TETRAD_v1"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
