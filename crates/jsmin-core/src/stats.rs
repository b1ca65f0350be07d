//! Size statistics for a minified buffer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinifyStats {
    pub original_len: usize,
    pub minified_len: usize,
}

impl MinifyStats {
    pub fn new(original_len: usize, minified_len: usize) -> Self {
        Self { original_len, minified_len }
    }

    /// Bytes removed; zero when the stats were built with a larger output.
    pub fn saved(&self) -> usize {
        self.original_len.saturating_sub(self.minified_len)
    }

    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.minified_len as f64 / self.original_len as f64
    }

    pub fn reduction_pct(&self) -> f64 {
        if self.original_len == 0 { return 0.0; }
        (self.saved() as f64 / self.original_len as f64) * 100.0
    }

    /// Accumulate another buffer's stats into a running total.
    pub fn merge(&mut self, other: &MinifyStats) {
        self.original_len += other.original_len;
        self.minified_len += other.minified_len;
    }
}
