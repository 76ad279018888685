//! Term store backing the spelling dictionary.
//!
//! Terms and counts live in append-only parallel arrays indexed by a stable
//! `u32` id; a map enforces term uniqueness. Terms whose accumulated
//! frequency has not yet reached the configured threshold wait in a side
//! pool until they earn promotion.

use ahash::AHashMap;

/// Append-only dictionary of `(term, count)` entries.
#[derive(Debug, Clone)]
pub struct TermStore {
    /// Terms, indexed by id.
    terms: Vec<String>,
    /// Frequencies, parallel to `terms`.
    counts: Vec<u32>,
    /// Term to id map; one entry per main-store term.
    term_ids: AHashMap<String, u32>,
    /// Accumulator for terms still below `count_threshold`.
    below_threshold: AHashMap<String, u32>,
    /// Longest stored term, in code points.
    max_length: usize,
    count_threshold: u32,
}

impl TermStore {
    /// Create an empty store with the given promotion threshold.
    pub fn new(count_threshold: u32) -> Self {
        TermStore {
            terms: Vec::new(),
            counts: Vec::new(),
            term_ids: AHashMap::new(),
            below_threshold: AHashMap::new(),
            max_length: 0,
            count_threshold,
        }
    }

    /// Add `count` occurrences of `term`.
    ///
    /// Counts are frequencies, not identities: re-adding an existing term
    /// sums into it, saturating at `u32::MAX`. Returns the id of the newly
    /// created main-store entry, or `None` when the term was merged into an
    /// existing entry or parked below the threshold.
    pub fn add_entry(&mut self, term: &str, count: u32) -> Option<u32> {
        if count == 0 && self.count_threshold > 0 {
            return None;
        }

        let mut count = count;
        if self.count_threshold > 1
            && let Some(previous) = self.below_threshold.get(term).copied()
        {
            count = count.saturating_add(previous);
            if count < self.count_threshold {
                self.below_threshold.insert(term.to_string(), count);
                return None;
            }
            self.below_threshold.remove(term);
        }

        if let Some(&id) = self.term_ids.get(term) {
            let slot = &mut self.counts[id as usize];
            *slot = slot.saturating_add(count);
            return None;
        }

        if count < self.count_threshold {
            self.below_threshold.insert(term.to_string(), count);
            return None;
        }

        let id = self.terms.len() as u32;
        self.terms.push(term.to_string());
        self.counts.push(count);
        self.term_ids.insert(term.to_string(), id);

        let length = term.chars().count();
        if length > self.max_length {
            self.max_length = length;
        }

        Some(id)
    }

    /// Id and count of `term`, when it is in the main store.
    pub fn get(&self, term: &str) -> Option<(u32, u32)> {
        let id = *self.term_ids.get(term)?;
        Some((id, self.counts[id as usize]))
    }

    /// Whether `term` is in the main store.
    pub fn contains(&self, term: &str) -> bool {
        self.term_ids.contains_key(term)
    }

    /// The term behind `id`.
    pub fn term(&self, id: u32) -> &str {
        &self.terms[id as usize]
    }

    /// The frequency behind `id`.
    pub fn count(&self, id: u32) -> u32 {
        self.counts[id as usize]
    }

    /// All main-store terms, in id order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of main-store entries.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the main store is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Length of the longest stored term, in code points.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Drop the below-threshold pool. Called once bulk loading completes;
    /// the pool must not be touched afterwards.
    pub fn clear_below_threshold(&mut self) {
        self.below_threshold = AHashMap::new();
    }

    #[cfg(test)]
    pub(crate) fn below_threshold_count(&self, term: &str) -> Option<u32> {
        self.below_threshold.get(term).copied()
    }
}
