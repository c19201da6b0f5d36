//! WebAssembly entry point for JS table views.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { TableSpans } from 'tablespan';
//! await init();
//! const spans = new TableSpans({ props: ['region'], direction: 'row' });
//! spans.setColumns(table.columns.map(c => ({ property: c.property, type: c.type })));
//! spans.setData(allRows);
//! spans.setWindow(startIndex, endIndex);
//! const spanMethod = ({ rowIndex, columnIndex }) => spans.span(rowIndex, columnIndex);
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::MergeConfig;
use crate::error::{Result, SpanError};
use crate::layout::{SpanGrid, ViewportWindow};
use crate::merge::{CacheStats, SpanCalculator, TableView};
use crate::types::{ColumnDescriptor, Row, SpanResult};

/// A table's data, columns and window together with its span calculator.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct TableSpans {
    calculator: SpanCalculator,
    data: Vec<Row>,
    columns: Vec<ColumnDescriptor>,
    window: Option<ViewportWindow>,
}

#[wasm_bindgen]
impl TableSpans {
    /// Create from a JS config object; `undefined` or `null` uses defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> std::result::Result<TableSpans, JsValue> {
        console_error_panic_hook::set_once();

        let config = if config.is_undefined() || config.is_null() {
            MergeConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(SpanError::from)?
        };
        Ok(Self::with_config(config))
    }

    /// Replace the full dataset.
    #[wasm_bindgen(js_name = "setData")]
    pub fn set_data(&mut self, rows: JsValue) -> std::result::Result<(), JsValue> {
        let rows: Vec<Row> = serde_wasm_bindgen::from_value(rows).map_err(SpanError::from)?;
        self.set_rows(rows);
        Ok(())
    }

    /// Replace the live column list.
    #[wasm_bindgen(js_name = "setColumns")]
    pub fn set_columns_js(&mut self, columns: JsValue) -> std::result::Result<(), JsValue> {
        let columns: Vec<ColumnDescriptor> =
            serde_wasm_bindgen::from_value(columns).map_err(SpanError::from)?;
        self.set_columns(columns);
        Ok(())
    }

    /// Set the rendered window `[start, end)`.
    #[wasm_bindgen(js_name = "setWindow")]
    pub fn set_window(&mut self, start: usize, end: usize) {
        self.window = Some(ViewportWindow::new(start, end));
    }

    /// Render every row (no virtualization).
    #[wasm_bindgen(js_name = "clearWindow")]
    pub fn clear_window(&mut self) {
        self.window = None;
    }

    /// `{rowspan, colspan}` for a rendered cell.
    #[wasm_bindgen]
    pub fn span(
        &mut self,
        row_index: usize,
        column_index: usize,
    ) -> std::result::Result<JsValue, JsValue> {
        let span = self.span_for(row_index, column_index);
        Ok(to_js(&span)?)
    }

    /// Spans and merge ranges for the whole rendered page.
    #[wasm_bindgen]
    pub fn grid(&mut self) -> std::result::Result<JsValue, JsValue> {
        let grid = self.span_grid();
        Ok(to_js(&grid)?)
    }

    #[wasm_bindgen(js_name = "clearCache")]
    pub fn clear_cache(&mut self) {
        self.calculator.clear_cache();
    }
}

impl TableSpans {
    pub fn with_config(config: MergeConfig) -> Self {
        Self {
            calculator: SpanCalculator::new(config),
            ..Self::default()
        }
    }

    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.data = rows;
    }

    pub fn set_columns(&mut self, columns: Vec<ColumnDescriptor>) {
        self.columns = columns;
    }

    pub fn window(&self) -> Option<ViewportWindow> {
        self.window
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.calculator.cache_stats()
    }

    pub fn span_for(&mut self, row_index: usize, column_index: usize) -> SpanResult {
        let table = TableView::over(&self.columns, &self.data, self.window);
        self.calculator.span_at(&table, row_index, column_index)
    }

    pub fn span_grid(&mut self) -> SpanGrid {
        let table = TableView::over(&self.columns, &self.data, self.window);
        SpanGrid::compute(&mut self.calculator, &table)
    }
}

/// Serialize to plain JS objects (not `Map`s).
fn to_js<T: Serialize>(value: &T) -> Result<JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}
