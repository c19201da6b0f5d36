//! Memoization of computed spans.
//!
//! Entries are keyed by `(global_row_index, property)`. The whole cache is
//! dropped whenever the dataset length or the window start changes between
//! calls, since spans computed for another window may no longer apply.

use std::collections::HashMap;

use crate::types::SpanResult;

/// Counters describing cache behaviour, mainly for tests and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Forward scans through the dataset for a row-direction owner
    pub row_scans: u64,
    /// Left/right scans through the column list
    pub col_scans: u64,
    /// Times the cache was cleared because the data or window moved
    pub invalidations: u64,
}

impl CacheStats {
    /// Total number of scans performed.
    pub fn scans(&self) -> u64 {
        self.row_scans + self.col_scans
    }
}

/// Identity of the data a cache's entries were computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fingerprint {
    data_len: usize,
    start_index: usize,
}

/// Span cache owned by a single calculator.
#[derive(Debug, Default)]
pub struct MergeCache {
    entries: HashMap<usize, HashMap<String, SpanResult>>,
    len: usize,
    fingerprint: Option<Fingerprint>,
    stats: CacheStats,
}

impl MergeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare the current data against the last call and clear on change.
    ///
    /// Returns `true` if entries were discarded.
    pub fn sync(&mut self, data_len: usize, start_index: usize) -> bool {
        let current = Fingerprint {
            data_len,
            start_index,
        };
        if self.fingerprint == Some(current) {
            return false;
        }
        let had_fingerprint = self.fingerprint.is_some();
        self.fingerprint = Some(current);
        self.clear();
        if had_fingerprint {
            self.stats.invalidations += 1;
        }
        had_fingerprint
    }

    /// Look up a span, counting the hit or miss.
    pub fn get(&mut self, row: usize, property: &str) -> Option<SpanResult> {
        let found = self
            .entries
            .get(&row)
            .and_then(|props| props.get(property))
            .copied();
        if found.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        found
    }

    /// Look up a span without touching the counters.
    pub fn peek(&self, row: usize, property: &str) -> Option<SpanResult> {
        self.entries
            .get(&row)
            .and_then(|props| props.get(property))
            .copied()
    }

    /// Store a span and return it, overwriting any previous entry.
    pub fn insert(&mut self, row: usize, property: &str, span: SpanResult) -> SpanResult {
        let props = self.entries.entry(row).or_default();
        if props.insert(property.to_string(), span).is_none() {
            self.len += 1;
        }
        span
    }

    pub fn record_row_scan(&mut self) {
        self.stats.row_scans += 1;
    }

    pub fn record_col_scan(&mut self) {
        self.stats.col_scans += 1;
    }

    pub fn contains(&self, row: usize, property: &str) -> bool {
        self.peek(row, property).is_some()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Remove all entries. The fingerprint and counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.len = 0;
    }

    /// Remove all entries and forget the fingerprint, as if newly created.
    /// Counters are kept.
    pub fn reset(&mut self) {
        self.clear();
        self.fingerprint = None;
    }
}
