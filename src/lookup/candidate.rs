//! Pooled per-lookup frontier state.

use ahash::AHashSet;
use parking_lot::Mutex;

use crate::lookup::Suggestion;

/// Scratch state for one lookup: the candidate queue, both dedup sets, and
/// the suggestion accumulator.
pub(crate) struct CandidateProcessor {
    /// FIFO queue of delete-variants of the truncated query. Processed slots
    /// are emptied in place, never removed.
    pub candidates: Vec<String>,
    pub cursor: usize,
    /// Delete-variants already enqueued.
    pub considered_deletes: AHashSet<String>,
    /// Term ids already verified or rejected.
    pub considered_ids: AHashSet<u32>,
    pub suggestions: Vec<Suggestion>,
    /// Verification ceiling; tightens under Top and Closest.
    pub current_max: usize,
}

impl CandidateProcessor {
    fn new() -> Self {
        CandidateProcessor {
            candidates: Vec::new(),
            cursor: 0,
            considered_deletes: AHashSet::new(),
            considered_ids: AHashSet::new(),
            suggestions: Vec::new(),
            current_max: 0,
        }
    }

    fn reset(&mut self, max_edit_distance: usize) {
        self.candidates.clear();
        self.cursor = 0;
        self.considered_deletes.clear();
        self.considered_ids.clear();
        self.suggestions.clear();
        self.current_max = max_edit_distance;
    }
}

/// Free list of processors shared by concurrent lookups.
#[derive(Default)]
pub(crate) struct ProcessorPool {
    free: Mutex<Vec<CandidateProcessor>>,
}

impl ProcessorPool {
    pub fn new() -> Self {
        ProcessorPool {
            free: Mutex::new(Vec::new()),
        }
    }

    pub fn acquire(&self, max_edit_distance: usize) -> CandidateProcessor {
        let mut processor = self
            .free
            .lock()
            .pop()
            .unwrap_or_else(CandidateProcessor::new);
        processor.reset(max_edit_distance);
        processor
    }

    pub fn release(&self, mut processor: CandidateProcessor) {
        processor.reset(0);
        self.free.lock().push(processor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_resets_state() {
        let pool = ProcessorPool::new();

        let mut processor = pool.acquire(2);
        processor.candidates.push("abc".to_string());
        processor.cursor = 1;
        processor.considered_deletes.insert("ab".to_string());
        processor.considered_ids.insert(7);
        processor.suggestions.push(Suggestion::new("abc", 1, 10));
        pool.release(processor);

        let processor = pool.acquire(3);
        assert!(processor.candidates.is_empty());
        assert_eq!(processor.cursor, 0);
        assert!(processor.considered_deletes.is_empty());
        assert!(processor.considered_ids.is_empty());
        assert!(processor.suggestions.is_empty());
        assert_eq!(processor.current_max, 3);
    }
}
