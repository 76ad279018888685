//! The spelling correction engine.
//!
//! Ties together the term store, the delete-variant index, the distance
//! kernel, and the pooled lookup machinery. Build the dictionary first, then
//! query; mutation must not overlap with queries, and the top-result cache
//! assumes a frozen store.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use log::warn;
use parking_lot::Mutex;

use crate::config::SpellConfig;
use crate::dictionary::TermStore;
use crate::dictionary::loader;
use crate::distance::DamerauLevenshtein;
use crate::error::{Result, SylphError};
use crate::index::DeleteIndex;
use crate::lookup::cache::TopCache;
use crate::lookup::candidate::ProcessorPool;

const TOP_CACHE_CAPACITY: usize = 128;

/// Symmetric-delete spelling correction engine.
///
/// # Examples
///
/// ```
/// use sylph::{SpellConfig, SpellEngine, Verbosity};
///
/// let mut engine = SpellEngine::new(SpellConfig::default()).unwrap();
/// engine.add_term("example", 100);
/// let suggestions = engine.lookup("exampel", Verbosity::Top, 2).unwrap();
/// assert_eq!(suggestions[0].term, "example");
/// ```
pub struct SpellEngine {
    pub(crate) config: SpellConfig,
    pub(crate) store: TermStore,
    pub(crate) index: DeleteIndex,
    pub(crate) distance: DamerauLevenshtein,
    pub(crate) processors: ProcessorPool,
    pub(crate) top_cache: Mutex<TopCache>,
    exact_transforms: Option<AHashMap<String, String>>,
    bigrams: Option<AHashMap<String, u32>>,
    bigram_count_min: u32,
}

impl SpellEngine {
    /// Create an empty engine with the given configuration.
    pub fn new(config: SpellConfig) -> Result<Self> {
        config.validate()?;
        Ok(SpellEngine {
            store: TermStore::new(config.count_threshold),
            index: DeleteIndex::new(),
            distance: DamerauLevenshtein::new(),
            processors: ProcessorPool::new(),
            top_cache: Mutex::new(TopCache::new(TOP_CACHE_CAPACITY)),
            exact_transforms: None,
            bigrams: None,
            bigram_count_min: u32::MAX,
            config,
        })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &SpellConfig {
        &self.config
    }

    /// Add `count` occurrences of `term` and index its delete-variants.
    ///
    /// Counts accumulate across calls. Returns whether a new main-store
    /// entry was created.
    pub fn add_term(&mut self, term: &str, count: u32) -> bool {
        match self.store.add_entry(term, count) {
            Some(id) => {
                self.index.insert_term(
                    id,
                    term,
                    self.config.max_dictionary_edit_distance,
                    self.config.prefix_length,
                );
                true
            }
            None => false,
        }
    }

    /// Load a frequency dictionary from `path`, then build the delete-index
    /// in parallel.
    ///
    /// `term_index` and `count_index` select the fields of each line split
    /// by `separator` (empty means any whitespace). Lines that fail to parse
    /// are skipped. A missing file is reported as `Ok(false)`.
    pub fn load_dictionary<P: AsRef<Path>>(
        &mut self,
        path: P,
        term_index: usize,
        count_index: usize,
        separator: &str,
    ) -> Result<bool> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(SylphError::dictionary("corpus path cannot be empty"));
        }
        if !path.exists() {
            warn!("dictionary file not found at {}", path.display());
            return Ok(false);
        }
        let file = File::open(path)?;
        self.load_dictionary_stream(BufReader::new(file), term_index, count_index, separator)
    }

    /// Stream variant of [`load_dictionary`](Self::load_dictionary).
    pub fn load_dictionary_stream<R: BufRead>(
        &mut self,
        reader: R,
        term_index: usize,
        count_index: usize,
        separator: &str,
    ) -> Result<bool> {
        for line in reader.lines() {
            let line = line?;
            if let Some((term, count)) =
                loader::parse_term_count(&line, term_index, count_index, separator)
            {
                self.store.add_entry(term, count);
            }
        }
        self.finalize();
        Ok(true)
    }

    /// Rebuild the packed delete-index over the whole store in parallel and
    /// drop the below-threshold pool.
    ///
    /// Bulk loads call this automatically; call it manually after a long run
    /// of [`add_term`](Self::add_term) to fold the append tail into the
    /// packed postings array.
    pub fn finalize(&mut self) {
        self.index.build(
            self.store.terms(),
            self.config.max_dictionary_edit_distance,
            self.config.prefix_length,
        );
        self.store.clear_below_threshold();
    }

    /// Load an exact-transform dictionary: each line maps an input token to
    /// a fixed replacement.
    pub fn load_exact_dictionary<P: AsRef<Path>>(
        &mut self,
        path: P,
        separator: &str,
    ) -> Result<bool> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(SylphError::dictionary("corpus path cannot be empty"));
        }
        let file = File::open(path)?;
        self.load_exact_dictionary_stream(BufReader::new(file), separator)
    }

    /// Stream variant of [`load_exact_dictionary`](Self::load_exact_dictionary).
    pub fn load_exact_dictionary_stream<R: BufRead>(
        &mut self,
        reader: R,
        separator: &str,
    ) -> Result<bool> {
        let map = self.exact_transforms.get_or_insert_with(AHashMap::new);
        for line in reader.lines() {
            let line = line?;
            if let Some((key, replacement)) = loader::parse_transform(&line, separator) {
                map.insert(key.to_string(), replacement.to_string());
            }
        }
        Ok(true)
    }

    /// Load a bigram frequency dictionary.
    pub fn load_bigram_dictionary<P: AsRef<Path>>(
        &mut self,
        path: P,
        separator: &str,
    ) -> Result<bool> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(SylphError::dictionary("corpus path cannot be empty"));
        }
        let file = File::open(path)?;
        self.load_bigram_dictionary_stream(BufReader::new(file), separator)
    }

    /// Stream variant of [`load_bigram_dictionary`](Self::load_bigram_dictionary).
    pub fn load_bigram_dictionary_stream<R: BufRead>(
        &mut self,
        reader: R,
        separator: &str,
    ) -> Result<bool> {
        let map = self.bigrams.get_or_insert_with(AHashMap::new);
        for line in reader.lines() {
            let line = line?;
            if let Some((pair, count)) = loader::parse_bigram(&line, separator) {
                if count < self.bigram_count_min {
                    self.bigram_count_min = count;
                }
                map.insert(pair, count);
            }
        }
        Ok(true)
    }

    /// Fixed replacement for `term`, when an exact-transform dictionary is
    /// loaded and has one.
    pub fn exact_transform(&self, term: &str) -> Option<&str> {
        self.exact_transforms.as_ref()?.get(term).map(String::as_str)
    }

    /// Frequency of a space-joined word pair, when a bigram dictionary is
    /// loaded and has it.
    pub fn bigram_count(&self, pair: &str) -> Option<u32> {
        self.bigrams.as_ref()?.get(pair).copied()
    }

    /// Smallest count seen across loaded bigrams; `u32::MAX` when none are
    /// loaded.
    pub fn bigram_count_min(&self) -> u32 {
        self.bigram_count_min
    }

    /// Release the optional bigram and exact-transform maps.
    pub fn clear_auxiliary(&mut self) {
        self.exact_transforms = None;
        self.bigrams = None;
        self.bigram_count_min = u32::MAX;
    }

    /// Whether `term` is in the dictionary.
    pub fn contains(&self, term: &str) -> bool {
        self.store.contains(term)
    }

    /// Frequency of `term`, when present.
    pub fn frequency(&self, term: &str) -> Option<u32> {
        self.store.get(term).map(|(_, count)| count)
    }

    /// Number of dictionary entries.
    pub fn term_count(&self) -> usize {
        self.store.len()
    }

    /// Length of the longest dictionary term, in code points.
    pub fn max_term_length(&self) -> usize {
        self.store.max_length()
    }
}
