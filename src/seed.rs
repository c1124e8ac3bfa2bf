//! Seed derivation for reproducible puzzles.
//!
//! A puzzle is identified by a [`SeedKey`]: a daily key (version tag + UTC date),
//! a level key (world + level index + an externally supplied 64-bit value) or
//! arbitrary text. Each key has a canonical text form, and the seed is
//! [`hash_seed`] of that text:
//!
//! ```text
//! seed = u64::from_be_bytes(SHA-256(canonical)[0..8])
//! ```
//!
//! ```
//! use tetrad::seed::{hash_seed, SeedKey};
//!
//! let key = SeedKey::daily("TETRAD_v1", "2025-01-01")?;
//! assert_eq!(key.canonical(), "TETRAD_v1|2025-01-01");
//! assert_eq!(key.seed(), hash_seed(b"TETRAD_v1|2025-01-01"));
//! # Ok::<(), tetrad::errors::ConfigError>(())
//! ```

use crate::errors::ConfigError;
use crate::word_index::WordIndex;
use sha2::{Digest, Sha256};
use std::fmt::{self, Display, Formatter};

/// Version tag used for daily puzzles unless the caller picks another.
pub const DEFAULT_VERSION_TAG: &str = "TETRAD_v1";

/// Hash arbitrary bytes into a 64-bit seed (first 8 bytes of SHA-256, big-endian).
#[must_use]
pub fn hash_seed(bytes: &[u8]) -> u64 {
    let digest = Sha256::digest(bytes);
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head)
}

/// The logical identity of a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedKey {
    /// Daily puzzle: version tag + `YYYY-MM-DD` UTC date.
    Daily { version_tag: String, date: String },
    /// Level puzzle: world identifier + level index + external 64-bit value.
    Level { world: String, level: u32, salt: u64 },
    /// Free-form seed text, hashed as-is.
    Text(String),
}

/// Check `date` is shaped `YYYY-MM-DD` with a plausible month and day.
fn validate_date(date: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidDate { input: date.to_string() };

    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid());
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_ok {
        return Err(invalid());
    }

    let month: u32 = date[5..7].parse().map_err(|_| invalid())?;
    let day: u32 = date[8..10].parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }
    Ok(())
}

impl SeedKey {
    /// Daily key.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyVersionTag`] for a blank tag, [`ConfigError::InvalidDate`]
    /// if `date` is not `YYYY-MM-DD`.
    pub fn daily(version_tag: &str, date: &str) -> Result<Self, ConfigError> {
        let version_tag = version_tag.trim();
        if version_tag.is_empty() {
            return Err(ConfigError::EmptyVersionTag);
        }
        let date = date.trim();
        validate_date(date)?;
        Ok(SeedKey::Daily { version_tag: version_tag.to_string(), date: date.to_string() })
    }

    /// Level key.
    #[must_use]
    pub fn level(world: &str, level: u32, salt: u64) -> Self {
        SeedKey::Level { world: world.to_string(), level, salt }
    }

    /// Free-form key.
    #[must_use]
    pub fn text(text: &str) -> Self {
        SeedKey::Text(text.to_string())
    }

    /// Canonical text hashed into the seed.
    #[must_use]
    pub fn canonical(&self) -> String {
        match self {
            SeedKey::Daily { version_tag, date } => format!("{version_tag}|{date}"),
            SeedKey::Level { world, level, salt } => format!("{world}|{level}|{salt}"),
            SeedKey::Text(text) => text.clone(),
        }
    }

    /// Seed for this key, independent of the dictionary.
    #[must_use]
    pub fn seed(&self) -> u64 {
        hash_seed(self.canonical().as_bytes())
    }

    /// Seed for this key bound to a specific dictionary.
    ///
    /// Changing the word list changes the seed, so a stored (key, seed) pair
    /// exposes dictionary drift instead of silently regenerating a different square.
    #[must_use]
    pub fn seed_for_dictionary(&self, index: &WordIndex) -> u64 {
        let folded = format!("{}|dict:{:016x}", self.canonical(), index.fingerprint());
        hash_seed(folded.as_bytes())
    }
}

impl Display for SeedKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}
