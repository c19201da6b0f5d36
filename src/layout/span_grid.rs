//! Spans for a whole rendered page.
//!
//! Computes every cell of the page once, in the order a table widget
//! renders them, and derives merge ranges and per-cell merge lookup from
//! the owners found.

use serde::Serialize;
use std::collections::HashMap;

use crate::merge::{SpanCalculator, TableView};
use crate::types::SpanResult;

/// A merged region in page-local coordinates (inclusive bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeRange {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl MergeRange {
    /// True if the page-local cell lies inside this range.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.start_row..=self.end_row).contains(&row)
            && (self.start_col..=self.end_col).contains(&col)
    }
}

/// Information about a cell covered by a merge range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeInfo {
    /// True if this cell is the top-left origin of the merge
    pub is_origin: bool,
    /// Row of the merge origin
    pub origin_row: usize,
    /// Column of the merge origin
    pub origin_col: usize,
    /// Number of rows in the merge
    pub row_span: u32,
    /// Number of columns in the merge
    pub col_span: u32,
}

/// Span of every cell on a rendered page, row-major.
#[derive(Debug, Clone, Serialize)]
pub struct SpanGrid {
    pub rows: usize,
    pub cols: usize,
    spans: Vec<SpanResult>,
    merges: Vec<MergeRange>,
    #[serde(skip)]
    merge_info: HashMap<(usize, usize), MergeInfo>,
}

impl SpanGrid {
    /// Evaluate every visible cell of `table` through `calculator`.
    pub fn compute(calculator: &mut SpanCalculator, table: &TableView<'_>) -> Self {
        let rows = table.window.visible.len();
        let cols = table.columns.len();

        let mut spans = Vec::with_capacity(rows.saturating_mul(cols));
        for row in 0..rows {
            for col in 0..cols {
                spans.push(calculator.span_at(table, row, col));
            }
        }

        let mut merges = Vec::new();
        let mut merge_info = HashMap::new();
        for (idx, span) in spans.iter().enumerate() {
            if !span.is_owner() || cols == 0 {
                continue;
            }
            let start_row = idx / cols;
            let start_col = idx % cols;
            let end_row = extent_end(start_row, span.row_span).min(rows.saturating_sub(1));
            let end_col = extent_end(start_col, span.col_span).min(cols.saturating_sub(1));
            let range = MergeRange {
                start_row,
                start_col,
                end_row,
                end_col,
            };

            for r in start_row..=end_row {
                for c in start_col..=end_col {
                    merge_info.insert(
                        (r, c),
                        MergeInfo {
                            is_origin: r == start_row && c == start_col,
                            origin_row: start_row,
                            origin_col: start_col,
                            row_span: span.row_span,
                            col_span: span.col_span,
                        },
                    );
                }
            }
            merges.push(range);
        }

        Self {
            rows,
            cols,
            spans,
            merges,
            merge_info,
        }
    }

    /// Span of the cell at a page-local position.
    pub fn span(&self, row: usize, col: usize) -> Option<SpanResult> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.spans.get(row * self.cols + col).copied()
    }

    /// Merged regions found on this page, in render order of their owners.
    pub fn merge_ranges(&self) -> &[MergeRange] {
        &self.merges
    }

    /// Merge lookup for a cell covered by a merged region.
    pub fn merge_info(&self, row: usize, col: usize) -> Option<&MergeInfo> {
        self.merge_info.get(&(row, col))
    }

    /// Number of cells the renderer must omit.
    pub fn hidden_count(&self) -> usize {
        self.spans.iter().filter(|s| s.is_hidden()).count()
    }

    /// Hidden cells not covered by any merge on this page. These belong to a
    /// run whose owner lies above the rendered window.
    pub fn uncovered_hidden_cells(&self) -> Vec<(usize, usize)> {
        self.spans
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_hidden())
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
            .filter(|&(row, col)| !self.merges.iter().any(|m| m.contains(row, col)))
            .collect()
    }

    /// Iterate `(row, col, span)` over every cell, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, SpanResult)> + '_ {
        let cols = self.cols.max(1);
        self.spans
            .iter()
            .enumerate()
            .map(move |(idx, span)| (idx / cols, idx % cols, *span))
    }
}

/// Last index covered by a span of `len` starting at `start`.
fn extent_end(start: usize, len: u32) -> usize {
    let len = usize::try_from(len).unwrap_or(usize::MAX);
    start.saturating_add(len.saturating_sub(1))
}
