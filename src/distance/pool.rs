//! Pooled row buffers for the distance kernels.

use parking_lot::Mutex;

/// The three rolling rows used by the Damerau-Levenshtein recurrence.
pub(crate) struct Rows {
    pub prev2: Vec<usize>,
    pub prev: Vec<usize>,
    pub curr: Vec<usize>,
}

impl Rows {
    fn with_width(width: usize) -> Self {
        Rows {
            prev2: vec![0; width],
            prev: vec![0; width],
            curr: vec![0; width],
        }
    }

    fn resize(&mut self, width: usize) {
        self.prev2.resize(width, 0);
        self.prev.resize(width, 0);
        self.curr.resize(width, 0);
    }

    /// prev2 <- prev, prev <- curr, curr is recycled.
    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.prev2, &mut self.prev);
        std::mem::swap(&mut self.prev, &mut self.curr);
    }
}

/// Free list of row sets shared by concurrent distance calls.
///
/// Buffers come back unzeroed; the kernels overwrite every cell they read.
#[derive(Default)]
pub(crate) struct RowPool {
    free: Mutex<Vec<Rows>>,
}

impl RowPool {
    pub fn new() -> Self {
        RowPool {
            free: Mutex::new(Vec::new()),
        }
    }

    pub fn acquire(&self, width: usize) -> Rows {
        match self.free.lock().pop() {
            Some(mut rows) => {
                rows.resize(width);
                rows
            }
            None => Rows::with_width(width),
        }
    }

    pub fn release(&self, rows: Rows) {
        self.free.lock().push(rows);
    }
}
