//! Lookup: frontier search over query delete-variants.
//!
//! The query's delete-variants are generated breadth-first and joined
//! against the delete-index; joined terms pass a chain of cheap filters
//! before the bounded distance kernel confirms them. Verbosity decides how
//! aggressively the search ceiling tightens as matches arrive.

pub(crate) mod cache;
pub(crate) mod candidate;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::distance::EditDistance;
use crate::engine::SpellEngine;
use crate::error::{Result, SylphError};
use crate::lookup::candidate::CandidateProcessor;

/// Which subset of matches a lookup returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verbosity {
    /// The single best suggestion.
    Top,
    /// All suggestions at the smallest distance found.
    Closest,
    /// Every suggestion within the requested distance.
    All,
}

/// A correction candidate returned by [`SpellEngine::lookup`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested dictionary term.
    pub term: String,
    /// Edit distance from the query.
    pub distance: usize,
    /// Frequency of the term in the dictionary.
    pub count: u32,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new<S: Into<String>>(term: S, distance: usize, count: u32) -> Self {
        Suggestion {
            term: term.into(),
            distance,
            count,
        }
    }
}

impl Eq for Suggestion {}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smaller distances first, larger counts first within a distance.
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.count.cmp(&self.count))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SpellEngine {
    /// Find dictionary terms within `max_edit_distance` edits of `phrase`,
    /// ranked by distance, then frequency.
    ///
    /// Fails with [`SylphError::OutOfRange`] when `max_edit_distance`
    /// exceeds the distance the index was built for. An exact match whose
    /// frequency is below the configured threshold does not end the search:
    /// a far more frequent near neighbor may displace it, for every
    /// verbosity.
    pub fn lookup(
        &self,
        phrase: &str,
        verbosity: Verbosity,
        max_edit_distance: usize,
    ) -> Result<Vec<Suggestion>> {
        if max_edit_distance > self.config.max_dictionary_edit_distance {
            return Err(SylphError::out_of_range(format!(
                "lookup distance {} exceeds the index maximum {}",
                max_edit_distance, self.config.max_dictionary_edit_distance
            )));
        }

        if verbosity == Verbosity::Top
            && let Some(hit) = self.top_cache.lock().get(phrase)
        {
            return Ok(vec![hit]);
        }

        let mut processor = self.processors.acquire(max_edit_distance);
        self.run_lookup(phrase, verbosity, max_edit_distance, &mut processor);
        let suggestions = std::mem::take(&mut processor.suggestions);
        self.processors.release(processor);

        if verbosity == Verbosity::Top
            && let Some(best) = suggestions.first()
        {
            self.top_cache
                .lock()
                .insert(phrase.to_string(), best.clone());
        }

        Ok(suggestions)
    }

    fn run_lookup(
        &self,
        phrase: &str,
        verbosity: Verbosity,
        max_edit_distance: usize,
        processor: &mut CandidateProcessor,
    ) {
        let phrase_chars: Vec<char> = phrase.chars().collect();
        let phrase_len = phrase_chars.len();

        // Word too long to match anything in the store.
        if phrase_len > self.store.max_length() + max_edit_distance {
            return;
        }

        let mut exact: Option<Suggestion> = None;
        if let Some((_, count)) = self.store.get(phrase) {
            let item = Suggestion::new(phrase, 0, count);
            processor.suggestions.push(item.clone());
            if verbosity != Verbosity::All && count >= self.config.frequency_threshold {
                return;
            }
            // Low-frequency exact match: keep searching for a better
            // neighbor.
            exact = Some(item);
        }

        if max_edit_distance == 0 {
            return;
        }

        let truncated: String = if phrase_len > self.config.prefix_length {
            phrase_chars[..self.config.prefix_length].iter().collect()
        } else {
            phrase.to_string()
        };
        processor.candidates.push(truncated);

        self.process_candidates(phrase, &phrase_chars, verbosity, max_edit_distance, processor);
        self.apply_frequency_tiebreak(processor, exact.as_ref());

        if processor.suggestions.len() > 1 {
            processor.suggestions.sort();
        }
    }

    fn process_candidates(
        &self,
        phrase: &str,
        phrase_chars: &[char],
        verbosity: Verbosity,
        max_edit_distance: usize,
        processor: &mut CandidateProcessor,
    ) {
        let phrase_len = phrase_chars.len();
        let prefix_length = self.config.prefix_length;

        while processor.cursor < processor.candidates.len() {
            let candidate = std::mem::take(&mut processor.candidates[processor.cursor]);
            processor.cursor += 1;
            let candidate_len = candidate.chars().count();
            // Candidates are delete-variants of the truncated phrase, so
            // they are never longer than it.
            let len_diff = phrase_len - candidate_len;

            // The queue grows by deletion depth, so len_diff never shrinks:
            // once it passes the ceiling only All has later work to do.
            if len_diff > processor.current_max {
                if verbosity == Verbosity::All {
                    continue;
                }
                break;
            }

            for id in self.index.postings(&candidate).iter() {
                let term = self.store.term(id);
                if term == phrase {
                    continue;
                }
                let term_len = term.chars().count();

                if term_len.abs_diff(phrase_len) > processor.current_max
                    || term_len < candidate_len
                    || (term_len == candidate_len && term != candidate)
                {
                    continue;
                }
                let term_prefix_len = term_len.min(prefix_length);
                if term_prefix_len > phrase_len
                    && term_prefix_len - candidate_len > processor.current_max
                {
                    continue;
                }

                let distance;
                if candidate_len == 0 {
                    // The only shared variant is the empty string; the
                    // strings have no characters in common.
                    let gap = phrase_len.max(term_len);
                    if gap > processor.current_max || !processor.considered_ids.insert(id) {
                        continue;
                    }
                    distance = gap;
                } else if term_len == 1 {
                    let first = term.chars().next().expect("term is non-empty");
                    let gap = if phrase_chars.contains(&first) {
                        phrase_len - 1
                    } else {
                        phrase_len
                    };
                    if gap > processor.current_max || !processor.considered_ids.insert(id) {
                        continue;
                    }
                    distance = gap;
                } else {
                    let term_chars: Vec<char> = term.chars().collect();
                    if prefix_length - max_edit_distance == candidate_len
                        && suffix_rules_out(phrase_chars, &term_chars, prefix_length)
                    {
                        continue;
                    }
                    if !processor.considered_ids.insert(id) {
                        continue;
                    }
                    match self
                        .distance
                        .distance_within(phrase, term, processor.current_max)
                    {
                        Some(d) => distance = d,
                        None => continue,
                    }
                }

                if distance <= processor.current_max {
                    self.integrate(term, id, distance, verbosity, processor);
                }
            }

            if len_diff <= max_edit_distance && candidate_len <= prefix_length {
                // Deeper deletions cannot beat the ceiling once len_diff
                // reaches it, except under All.
                if verbosity != Verbosity::All && len_diff >= processor.current_max {
                    continue;
                }
                let candidate_chars: Vec<char> = candidate.chars().collect();
                for i in 0..candidate_chars.len() {
                    let mut deleted = String::with_capacity(candidate.len());
                    deleted.extend(&candidate_chars[..i]);
                    deleted.extend(&candidate_chars[i + 1..]);
                    if !processor.considered_deletes.contains(&deleted) {
                        processor.considered_deletes.insert(deleted.clone());
                        processor.candidates.push(deleted);
                    }
                }
            }
        }
    }

    fn integrate(
        &self,
        term: &str,
        id: u32,
        distance: usize,
        verbosity: Verbosity,
        processor: &mut CandidateProcessor,
    ) {
        let count = self.store.count(id);
        let item = Suggestion::new(term, distance, count);

        if !processor.suggestions.is_empty() {
            match verbosity {
                Verbosity::Closest => {
                    // A strictly better distance invalidates everything
                    // collected so far.
                    if distance < processor.current_max {
                        processor.suggestions.clear();
                    }
                }
                Verbosity::Top => {
                    let best = &processor.suggestions[0];
                    if distance < processor.current_max || count > best.count {
                        processor.current_max = distance;
                        processor.suggestions[0] = item;
                    }
                    return;
                }
                Verbosity::All => {}
            }
        }

        if verbosity != Verbosity::All {
            processor.current_max = distance;
        }
        processor.suggestions.push(item);
    }

    fn apply_frequency_tiebreak(
        &self,
        processor: &mut CandidateProcessor,
        exact: Option<&Suggestion>,
    ) {
        let Some(exact) = exact else {
            return;
        };
        if processor.suggestions.len() <= 1 {
            return;
        }

        let required = exact.count as u64 * self.config.frequency_multiplier as u64;
        let mut best: Option<&Suggestion> = None;
        for suggestion in &processor.suggestions {
            if suggestion.distance == 0 || suggestion.distance > 2 {
                continue;
            }
            if (suggestion.count as u64) < required {
                continue;
            }
            let better = match best {
                None => true,
                Some(current) => {
                    suggestion.count > current.count
                        || (suggestion.count == current.count
                            && suggestion.distance < current.distance)
                }
            };
            if better {
                best = Some(suggestion);
            }
        }

        // A sufficiently dominant neighbor evicts the accidental exact hit.
        if best.is_some() {
            processor.suggestions.retain(|s| s.distance != 0);
        }
    }
}

/// Suffix check applied when a candidate is exactly the shortest prefix
/// delete. The last `min_distance` code points must match outright or as a
/// single adjacent transposition; anything else cannot land within the
/// allowed distance.
fn suffix_rules_out(phrase: &[char], term: &[char], prefix_length: usize) -> bool {
    let min_distance = phrase.len().min(term.len()) as isize - prefix_length as isize;
    if min_distance > 1 {
        let tail = min_distance as usize;
        if phrase[phrase.len() + 1 - tail..] != term[term.len() + 1 - tail..] {
            return true;
        }
    }
    if min_distance > 0 {
        let tail = min_distance as usize;
        if phrase[phrase.len() - tail] != term[term.len() - tail]
            && (phrase[phrase.len() - tail - 1] != term[term.len() - tail]
                || phrase[phrase.len() - tail] != term[term.len() - tail - 1])
        {
            return true;
        }
    }
    false
}
