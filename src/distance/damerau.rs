//! Damerau-Levenshtein kernels over generic symbol slices.
//!
//! One kernel serves both the byte (ASCII) and code-point paths; the caller
//! picks the symbol type. The bounded kernel restricts work to the
//! `[i - k, i + k]` diagonal band and aborts as soon as a whole row exceeds
//! the limit.

use crate::distance::pool::{RowPool, Rows};

/// Exact Damerau-Levenshtein distance with adjacent transposition.
pub(crate) fn distance_exact<T: Copy + Eq>(a: &[T], b: &[T], pool: &RowPool) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut rows = pool.acquire(n + 1);
    let result = exact_kernel(a, b, &mut rows);
    pool.release(rows);
    result
}

/// Bounded variant: `Some(d)` when the true distance is at most
/// `max_distance`, `None` otherwise.
pub(crate) fn distance_bounded<T: Copy + Eq>(
    a: &[T],
    b: &[T],
    max_distance: usize,
    pool: &RowPool,
) -> Option<usize> {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return (n <= max_distance).then_some(n);
    }
    if n == 0 {
        return (m <= max_distance).then_some(m);
    }
    if m.abs_diff(n) > max_distance {
        return None;
    }

    let mut rows = pool.acquire(n + 1);
    let result = bounded_kernel(a, b, max_distance, &mut rows);
    pool.release(rows);
    result
}

fn exact_kernel<T: Copy + Eq>(a: &[T], b: &[T], rows: &mut Rows) -> usize {
    let m = a.len();
    let n = b.len();

    for (j, cell) in rows.prev.iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        rows.curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let del = rows.prev[j] + 1;
            let ins = rows.curr[j - 1] + 1;
            let sub = rows.prev[j - 1] + cost;
            let mut dist = del.min(ins).min(sub);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                dist = dist.min(rows.prev2[j - 2] + cost);
            }
            rows.curr[j] = dist;
        }
        rows.rotate();
    }

    rows.prev[n]
}

fn bounded_kernel<T: Copy + Eq>(a: &[T], b: &[T], k: usize, rows: &mut Rows) -> Option<usize> {
    let m = a.len();
    let n = b.len();
    let limit = k + 1;

    for (j, cell) in rows.prev.iter_mut().enumerate() {
        *cell = if j <= k { j } else { limit };
    }

    for i in 1..=m {
        rows.curr[0] = i;

        let j_start = if i > k { i - k } else { 1 };
        let j_end = n.min(i + k);

        // Cells outside the band are logically `limit`; write sentinels at
        // the boundaries so neighbor reads stay valid.
        if j_start > 1 {
            rows.curr[j_start - 1] = limit;
        }

        let mut row_min = limit;
        for j in j_start..=j_end {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let del = rows.prev[j] + 1;
            let ins = rows.curr[j - 1] + 1;
            let sub = rows.prev[j - 1] + cost;
            let mut dist = del.min(ins).min(sub);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                dist = dist.min(rows.prev2[j - 2] + cost);
            }
            rows.curr[j] = dist;
            row_min = row_min.min(dist);
        }

        if row_min > k {
            return None;
        }
        if j_end < n {
            rows.curr[j_end + 1] = limit;
        }
        rows.rotate();
    }

    let result = rows.prev[n];
    (result <= k).then_some(result)
}
