//! Edit distance calculation for spelling correction.
//!
//! Candidate verification runs the bounded kernel: it returns early once the
//! distance provably exceeds the caller's limit, which is the common case
//! during a lookup.

mod damerau;
mod pool;

use pool::RowPool;

/// The two surfaces the lookup engine needs from a distance measure.
pub trait EditDistance {
    /// Exact edit distance between `a` and `b`.
    fn distance(&self, a: &str, b: &str) -> usize;

    /// `Some(d)` when the true distance `d` is at most `max_distance`,
    /// `None` otherwise.
    fn distance_within(&self, a: &str, b: &str, max_distance: usize) -> Option<usize>;
}

/// Damerau-Levenshtein distance with adjacent transposition as a unit-cost
/// operation.
///
/// Pure-ASCII pairs are compared byte-wise; anything else goes through code
/// points. Both paths produce identical results on ASCII input; the split
/// exists only for speed. Row buffers are pooled across calls, so the
/// steady-state ASCII path performs no allocation.
#[derive(Default)]
pub struct DamerauLevenshtein {
    rows: RowPool,
}

impl DamerauLevenshtein {
    /// Create a new comparer with an empty buffer pool.
    pub fn new() -> Self {
        DamerauLevenshtein {
            rows: RowPool::new(),
        }
    }
}

impl EditDistance for DamerauLevenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        if a.is_ascii() && b.is_ascii() {
            damerau::distance_exact(a.as_bytes(), b.as_bytes(), &self.rows)
        } else {
            let a_chars: Vec<char> = a.chars().collect();
            let b_chars: Vec<char> = b.chars().collect();
            damerau::distance_exact(&a_chars, &b_chars, &self.rows)
        }
    }

    fn distance_within(&self, a: &str, b: &str, max_distance: usize) -> Option<usize> {
        if a.is_ascii() && b.is_ascii() {
            damerau::distance_bounded(a.as_bytes(), b.as_bytes(), max_distance, &self.rows)
        } else {
            let a_chars: Vec<char> = a.chars().collect();
            let b_chars: Vec<char> = b.chars().collect();
            damerau::distance_bounded(&a_chars, &b_chars, max_distance, &self.rows)
        }
    }
}
