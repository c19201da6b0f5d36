//! Per-cell span computation.
//!
//! The table view calls [`SpanCalculator::compute`] once for every cell it
//! renders. Row-direction merging walks the full dataset so a run that
//! started above the rendered window is still recognised; the resulting
//! span is capped to the rows that are actually materialized.

use tracing::{debug, trace, warn};

use crate::config::MergeConfig;
use crate::layout::{ViewportWindow, VirtualWindow};
use crate::types::{CellValue, ColumnDescriptor, Row, SpanResult};

use super::cache::{CacheStats, MergeCache};

const LOG_TARGET: &str = "tablespan";

/// The cell being rendered.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    /// Row data, `None` if the table could not supply it
    pub row: Option<&'a Row>,
    pub column: &'a ColumnDescriptor,
    /// Position within the rendered page
    pub row_index: usize,
    /// Position within the live column list
    pub column_index: usize,
}

/// Everything the calculator needs to know about the hosting table.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    /// Live column list, in display order
    pub columns: &'a [ColumnDescriptor],
    pub window: VirtualWindow<'a>,
}

impl<'a> TableView<'a> {
    pub fn new(columns: &'a [ColumnDescriptor], window: VirtualWindow<'a>) -> Self {
        Self { columns, window }
    }

    /// A table without virtualization.
    pub fn unvirtualized(columns: &'a [ColumnDescriptor], rows: &'a [Row]) -> Self {
        Self::new(columns, VirtualWindow::unvirtualized(rows))
    }

    /// A table over `rows`, virtualized when a window is given.
    pub fn over(
        columns: &'a [ColumnDescriptor],
        rows: &'a [Row],
        window: Option<ViewportWindow>,
    ) -> Self {
        match window {
            Some(range) => Self::new(columns, VirtualWindow::over(rows, range)),
            None => Self::unvirtualized(columns, rows),
        }
    }
}

/// Computes row/column spans with an owned memoization cache.
///
/// One calculator per grid: the cache assumes every call refers to the same
/// dataset and column list.
#[derive(Debug, Default)]
pub struct SpanCalculator {
    config: MergeConfig,
    cache: MergeCache,
}

impl SpanCalculator {
    pub fn new(config: MergeConfig) -> Self {
        Self {
            config,
            cache: MergeCache::new(),
        }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Replace the configuration. Cached spans are discarded.
    pub fn set_config(&mut self, config: MergeConfig) {
        self.config = config;
        self.cache.reset();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Number of memoized spans.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Clear the cache and forget which data it was computed for.
    pub fn reset(&mut self) {
        self.cache.reset();
    }

    /// Span for the cell at a page-local position, looking the row and
    /// column up in `table`.
    pub fn span_at(
        &mut self,
        table: &TableView<'_>,
        row_index: usize,
        column_index: usize,
    ) -> SpanResult {
        let Some(column) = table.columns.get(column_index) else {
            warn!(
                target: LOG_TARGET,
                row_index, column_index, "column index outside the column list"
            );
            return SpanResult::IDENTITY;
        };
        let cell = CellContext {
            row: table.window.visible_row(row_index),
            column,
            row_index,
            column_index,
        };
        self.compute(&cell, table)
    }

    /// Span for one rendered cell.
    ///
    /// Never fails: missing data degrades to an unmerged `{1, 1}` cell.
    pub fn compute(&mut self, cell: &CellContext<'_>, table: &TableView<'_>) -> SpanResult {
        let window = &table.window;

        if self.cache.sync(window.all.len(), window.start_index()) {
            debug!(
                target: LOG_TARGET,
                data_len = window.all.len(),
                start_index = window.start_index(),
                "data or window changed, span cache cleared"
            );
        }

        if cell.column.is_non_data() {
            return SpanResult::IDENTITY;
        }

        let Some(row) = cell.row else {
            warn!(
                target: LOG_TARGET,
                row_index = cell.row_index,
                column_index = cell.column_index,
                property = ?cell.column.property(),
                "row data is missing, cell left unmerged"
            );
            return SpanResult::IDENTITY;
        };

        let Some(property) = cell.column.property() else {
            warn!(
                target: LOG_TARGET,
                row_index = cell.row_index,
                column_index = cell.column_index,
                "data column has no property, cell left unmerged"
            );
            return SpanResult::IDENTITY;
        };

        if !self.config.is_eligible(property) {
            return SpanResult::IDENTITY;
        }

        let global = window.range.global_index(cell.row_index);
        if let Some(span) = self.cache.get(global, property) {
            trace!(target: LOG_TARGET, global, property, "span cache hit");
            return span;
        }

        let current = row.get(property);

        if self.config.direction.includes_rows() {
            if let Some(span) = self.row_span(window, global, property, current) {
                return self.cache.insert(global, property, span);
            }
        }

        if self.config.direction.includes_columns() {
            if let Some(span) = self.col_span(table.columns, row, property, current) {
                return self.cache.insert(global, property, span);
            }
        }

        self.cache.insert(global, property, SpanResult::IDENTITY)
    }

    /// Row-direction rule. `None` when the cell is a single-row owner, so
    /// the column rule may still apply.
    fn row_span(
        &mut self,
        window: &VirtualWindow<'_>,
        global: usize,
        property: &str,
        current: Option<&CellValue>,
    ) -> Option<SpanResult> {
        let continues_run = global
            .checked_sub(1)
            .and_then(|prev| window.row_at(prev))
            .is_some_and(|prev| prev.value_eq(property, current));
        if continues_run {
            return Some(SpanResult::ROW_HIDDEN);
        }

        self.cache.record_row_scan();
        let following = window
            .all
            .get(global.saturating_add(1)..)
            .unwrap_or(&[])
            .iter()
            .take_while(|r| r.value_eq(property, current))
            .count();
        if following == 0 {
            return None;
        }

        let run = u32::try_from(following.saturating_add(1)).unwrap_or(u32::MAX);
        let remaining = u32::try_from(window.range.remaining_from(global)).unwrap_or(u32::MAX);
        Some(SpanResult::new(run.min(remaining).max(1), 1))
    }

    /// Column-direction rule over the live column list. `None` when the cell
    /// neither continues nor starts a run.
    fn col_span(
        &mut self,
        columns: &[ColumnDescriptor],
        row: &Row,
        property: &str,
        current: Option<&CellValue>,
    ) -> Option<SpanResult> {
        let Some(position) = columns.iter().position(|c| c.property() == Some(property)) else {
            debug!(
                target: LOG_TARGET,
                property, "property not in the column list, cell left unmerged"
            );
            return Some(SpanResult::IDENTITY);
        };

        self.cache.record_col_scan();
        let config = &self.config;
        let (before, after) = columns.split_at(position);

        let continues_run = before
            .iter()
            .rev()
            .filter_map(|c| eligible_property(config, c))
            .any(|p| row.value_eq(p, current));
        if continues_run {
            return Some(SpanResult::COL_HIDDEN);
        }

        let following = after
            .iter()
            .skip(1)
            .filter_map(|c| eligible_property(config, c))
            .take_while(|p| row.value_eq(p, current))
            .count();
        if following == 0 {
            return None;
        }

        let run = u32::try_from(following.saturating_add(1)).unwrap_or(u32::MAX);
        Some(SpanResult::new(1, run))
    }
}

/// Property of a column that takes part in column-direction merging.
fn eligible_property<'c>(config: &MergeConfig, column: &'c ColumnDescriptor) -> Option<&'c str> {
    if column.is_non_data() {
        return None;
    }
    column.property().filter(|p| config.is_eligible(p))
}
