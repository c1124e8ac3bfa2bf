//! Generate error code documentation from the source of truth (the error enum).
//!
//! Codes, descriptions, details and help text come straight from
//! `ConfigError::code()`, `description()`, `details()` and `help()`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;
use tetrad::errors::ConfigError;

/// Append documentation for every error in `$errors` to the `$out` string.
///
/// Works for any error type with `code()`, `description()`, `details()`,
/// `help()` and `display_detailed()`. Writing to a `String` cannot fail.
macro_rules! generate_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            let _ = writeln!($out, "### {}: {}\n", error.code(), error.description());
            let _ = writeln!($out, "**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                let _ = writeln!($out, "**How to fix:**\n```\n{help_text}\n```\n");
            }

            let _ = writeln!($out, "**Example error message:**\n```\n{error}\n```\n");
            let _ = writeln!($out, "**Detailed format:**\n```\n{}\n```\n", error.display_detailed());
            let _ = writeln!($out, "---\n");
        }
    };
}

/// One instance of every `ConfigError` variant
fn all_config_error_variants() -> Vec<ConfigError> {
    vec![
        ConfigError::InvalidSize { size: 20 },
        ConfigError::InvalidSolutionCap { cap: 1 },
        ConfigError::InvalidDate { input: "01/02/2025".to_string() },
        ConfigError::EmptyVersionTag,
    ]
}

fn render_docs() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    let _ = writeln!(out, "## Configuration Errors\n");
    let _ = writeln!(
        out,
        "Errors from generator settings and seed keys. The generator itself never fails: \
         when no puzzle can be found it reports a status instead.\n"
    );
    generate_error_docs!(out, all_config_error_variants());

    let _ = writeln!(out, "## Error Display Formats\n");
    let _ = writeln!(out, "### Simple Format\n```\nError: <message>\n```\n");
    let _ = writeln!(out, "### Detailed Format (via `display_detailed()`)\n```\n<message> (<code>)\n<help text if available>\n```");

    out
}

fn main() {
    print!("{}", render_docs());
}
