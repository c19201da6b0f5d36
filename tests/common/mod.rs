//! Common test utilities and assertion helpers.
//!
//! This module provides helpers for driving a [`SpanCalculator`] over
//! fixture tables and capturing the log output it produces.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::io;
use std::sync::{Arc, Mutex};

use tablespan::{
    MergeConfig, SpanCalculator, SpanResult, TableView, ViewportWindow, VirtualWindow,
};

// Re-export fixtures for convenience
pub use super::fixtures::*;

// ============================================================================
// Span helpers
// ============================================================================

/// Span of every cell in one column, for an unvirtualized table.
pub fn column_spans(table: &Table, config: MergeConfig, column_index: usize) -> Vec<SpanResult> {
    let mut calc = SpanCalculator::new(config);
    let view = TableView::unvirtualized(&table.columns, &table.rows);
    (0..table.rows.len())
        .map(|r| calc.span_at(&view, r, column_index))
        .collect()
}

/// Span of every cell in one row, for an unvirtualized table.
pub fn row_spans(table: &Table, config: MergeConfig, row_index: usize) -> Vec<SpanResult> {
    let mut calc = SpanCalculator::new(config);
    let view = TableView::unvirtualized(&table.columns, &table.rows);
    (0..table.columns.len())
        .map(|c| calc.span_at(&view, row_index, c))
        .collect()
}

/// Span of every rendered cell of one column for a virtualized window.
pub fn windowed_column_spans(
    calc: &mut SpanCalculator,
    table: &Table,
    range: ViewportWindow,
    column_index: usize,
) -> Vec<SpanResult> {
    let view = TableView::new(&table.columns, VirtualWindow::over(&table.rows, range));
    (0..view.window.visible.len())
        .map(|r| calc.span_at(&view, r, column_index))
        .collect()
}

/// Shorthand for `SpanResult::new`.
pub fn span(row_span: u32, col_span: u32) -> SpanResult {
    SpanResult::new(row_span, col_span)
}

// ============================================================================
// Log capture
// ============================================================================

#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that records everything at `warn` and above.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buffer.contents())
}
