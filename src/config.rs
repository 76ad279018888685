//! Configuration for the spelling correction engine.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SylphError};

/// Tunables for [`SpellEngine`](crate::engine::SpellEngine).
///
/// The configuration is validated at engine construction and immutable
/// afterwards; the delete-variant index is shaped by these values, so
/// changing them would invalidate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellConfig {
    /// Maximum edit distance considered at index build and query time.
    pub max_dictionary_edit_distance: usize,
    /// Maximum number of code points of each term used as the
    /// delete-enumeration key. Must be greater than
    /// `max_dictionary_edit_distance`.
    pub prefix_length: usize,
    /// Minimum accumulated frequency before a term enters the main store.
    pub count_threshold: u32,
    /// Exact-match count at or above which a lookup short-circuits without
    /// searching for neighbors.
    pub frequency_threshold: u32,
    /// How many times more frequent a near neighbor must be to displace an
    /// exact match from the results. Must be greater than 1.
    pub frequency_multiplier: u32,
    /// Caller hint for minimum characters worth changing; not consulted by
    /// the engine itself.
    pub min_chars_to_change: usize,
}

impl Default for SpellConfig {
    fn default() -> Self {
        SpellConfig {
            max_dictionary_edit_distance: 2,
            prefix_length: 7,
            count_threshold: 1,
            frequency_threshold: 1000,
            frequency_multiplier: 10,
            min_chars_to_change: 1,
        }
    }
}

impl SpellConfig {
    /// Balanced frequency correction: threshold 1000, multiplier 10.
    pub fn smart_frequency() -> Self {
        SpellConfig {
            frequency_threshold: 1000,
            frequency_multiplier: 10,
            ..Default::default()
        }
    }

    /// Strict frequency correction: alternatives displace exact matches more
    /// readily. Threshold 5000, multiplier 5.
    pub fn strict_frequency() -> Self {
        SpellConfig {
            frequency_threshold: 5000,
            frequency_multiplier: 5,
            ..Default::default()
        }
    }

    /// Lenient frequency correction: exact matches are rarely displaced.
    /// Threshold 100, multiplier 20.
    pub fn lenient_frequency() -> Self {
        SpellConfig {
            frequency_threshold: 100,
            frequency_multiplier: 20,
            ..Default::default()
        }
    }

    /// Check that every tunable is inside its documented domain.
    pub fn validate(&self) -> Result<()> {
        if self.prefix_length < 1 {
            return Err(SylphError::config("prefixLength cannot be less than 1"));
        }
        if self.prefix_length <= self.max_dictionary_edit_distance {
            return Err(SylphError::config(
                "prefixLength must be greater than maxDictionaryEditDistance",
            ));
        }
        if self.frequency_multiplier <= 1 {
            return Err(SylphError::config(
                "frequencyMultiplier must be greater than 1",
            ));
        }
        Ok(())
    }
}
