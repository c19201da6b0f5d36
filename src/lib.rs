//! tablespan - cell merging for data tables
//!
//! Computes how many rows and columns each rendered cell of a table spans:
//! - Row merging of equal consecutive values, across virtualized windows
//! - Column merging of equal adjacent values within a row
//! - Index and selection columns are never merged
//! - Per-grid memoization, cleared when the data or window moves
//!
//! # Usage (Rust)
//!
//! ```rust
//! use tablespan::{ColumnDescriptor, MergeConfig, Row, SpanCalculator, SpanResult, TableView};
//!
//! let data: Vec<Row> = ["A", "A", "B"].iter().map(|g| Row::new().with("g", *g)).collect();
//! let columns = vec![ColumnDescriptor::data("g")];
//! let table = TableView::unvirtualized(&columns, &data);
//!
//! let mut spans = SpanCalculator::new(MergeConfig::rows());
//! assert_eq!(spans.span_at(&table, 0, 0), SpanResult::new(2, 1));
//! assert_eq!(spans.span_at(&table, 1, 0), SpanResult::new(0, 0));
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { TableSpans } from 'tablespan';
//! await init();
//! const spans = new TableSpans({ direction: 'row' });
//! spans.setColumns(columns);
//! spans.setData(rows);
//! spans.span(rowIndex, columnIndex); // { rowspan, colspan }
//! ```

pub mod bindings;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod merge;
pub mod types;

use wasm_bindgen::prelude::*;

pub use bindings::TableSpans;
pub use config::{MergeConfig, MergeDirection};
pub use error::{Result, SpanError};
pub use input::TableInput;
pub use layout::{MergeInfo, MergeRange, SpanGrid, ViewportWindow, VirtualWindow};
pub use merge::{CacheStats, CellContext, SpanCalculator, TableView};
pub use types::*;

/// Compute the span grid for a table described as JSON and return it as JSON.
///
/// # Arguments
/// * `input` - A [`TableInput`] document (`columns`, `data`, optional `config` and `window`)
///
/// # Errors
/// Returns an error if the input is not a valid table description.
#[wasm_bindgen(js_name = "computeSpansJson")]
pub fn compute_spans_json(input: &str) -> std::result::Result<String, JsValue> {
    let table = TableInput::from_json(input)?;
    let grid = table.span_grid();
    serde_json::to_string(&grid)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
