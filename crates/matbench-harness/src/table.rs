//! Size-keyed table of per-method timings.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::method::Method;

type MethodTimes = [Option<Duration>; Method::COUNT];

/// One row of a [`ResultTable`]: a size plus one optional timing per method.
///
/// `None` means "not measured"; zero is a valid (very fast) measurement and
/// is never used as a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRow {
    size: usize,
    times: MethodTimes,
}

impl ResultRow {
    /// Size this row was measured at.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Timing for `method`, if it was measured at this size.
    #[must_use]
    pub fn time(&self, method: Method) -> Option<Duration> {
        self.times[method.index()]
    }
}

/// Ordered collection of [`ResultRow`], unique and sorted ascending by size.
///
/// Sweeps only ever append sizes in increasing order, so the table keeps an
/// ordered map from size to a fixed-width timing record instead of
/// rescanning a list on every insert.
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    rows: BTreeMap<usize, MethodTimes>,
}

impl ResultTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new row for `size`, or update one cell of an existing row.
    pub fn record(&mut self, size: usize, method: Method, elapsed: Duration) {
        let times = self.rows.entry(size).or_insert([None; Method::COUNT]);
        times[method.index()] = Some(elapsed);
    }

    /// Timing recorded for `(size, method)`, if any.
    #[must_use]
    pub fn time(&self, size: usize, method: Method) -> Option<Duration> {
        self.rows.get(&size).and_then(|times| times[method.index()])
    }

    /// Rows in ascending size order.
    pub fn rows(&self) -> impl Iterator<Item = ResultRow> + '_ {
        self.rows
            .iter()
            .map(|(&size, &times)| ResultRow { size, times })
    }

    /// Number of distinct sizes recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether any measurement has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
