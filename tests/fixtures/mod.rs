//! Test fixtures for building tables in memory.
//!
//! # Example
//!
//! ```rust
//! use fixtures::TableBuilder;
//!
//! let table = TableBuilder::new()
//!     .index_column()
//!     .columns(["region", "city"])
//!     .row([("region", "North"), ("city", "Oslo")])
//!     .row([("region", "North"), ("city", "Bergen")])
//!     .build();
//! ```
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use tablespan::{CellValue, ColumnDescriptor, Row};

/// An owned table: column list plus full dataset.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<Row>,
}

// ============================================================================
// Table Builder
// ============================================================================

#[derive(Debug, Default)]
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index_column(mut self) -> Self {
        self.table.columns.push(ColumnDescriptor::index());
        self
    }

    pub fn selection_column(mut self) -> Self {
        self.table.columns.push(ColumnDescriptor::selection());
        self
    }

    pub fn column(mut self, property: &str) -> Self {
        self.table.columns.push(ColumnDescriptor::data(property));
        self
    }

    pub fn columns<const N: usize>(mut self, properties: [&str; N]) -> Self {
        for p in properties {
            self.table.columns.push(ColumnDescriptor::data(p));
        }
        self
    }

    pub fn row<V: Into<CellValue>, const N: usize>(mut self, values: [(&str, V); N]) -> Self {
        self.table.rows.push(values.into_iter().collect());
        self
    }

    /// One row per value, all in `property`.
    pub fn rows_in<V: Into<CellValue> + Clone>(mut self, property: &str, values: &[V]) -> Self {
        for v in values {
            self.table
                .rows
                .push(Row::new().with(property, v.clone()));
        }
        self
    }

    pub fn build(self) -> Table {
        self.table
    }
}

// ============================================================================
// Dataset generators
// ============================================================================

/// Deterministic pseudo-random values drawn from a small alphabet, so runs of
/// equal values occur often.
pub fn noisy_values(len: usize, alphabet: usize, seed: u64) -> Vec<String> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            format!("v{}", (state >> 33) % alphabet as u64)
        })
        .collect()
}

/// Maximal runs of equal values as `(start, len)`.
pub fn runs<T: PartialEq>(values: &[T]) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut start = 0;
    for i in 1..=values.len() {
        if i == values.len() || values[i] != values[start] {
            out.push((start, i - start));
            start = i;
        }
    }
    out
}
