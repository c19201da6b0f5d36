//! JSON description of a whole table, as accepted by the CLI and
//! [`crate::compute_spans_json`].
//!
//! ```json
//! {
//!   "columns": [{"type": "index"}, {"property": "region"}],
//!   "data": [{"region": "North"}, {"region": "North"}],
//!   "config": {"direction": "row"},
//!   "window": {"startIndex": 0, "endIndex": 2}
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::MergeConfig;
use crate::error::Result;
use crate::layout::{SpanGrid, ViewportWindow};
use crate::merge::{SpanCalculator, TableView};
use crate::types::{ColumnDescriptor, Row};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableInput {
    pub columns: Vec<ColumnDescriptor>,
    /// Full dataset
    pub data: Vec<Row>,
    #[serde(default)]
    pub config: MergeConfig,
    /// Rendered window; absent means the table is not virtualized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<ViewportWindow>,
}

impl TableInput {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// View of this table for the calculator.
    pub fn view(&self) -> TableView<'_> {
        TableView::over(&self.columns, &self.data, self.window)
    }

    /// Spans of the rendered page, computed with a fresh calculator.
    pub fn span_grid(&self) -> SpanGrid {
        let mut calculator = SpanCalculator::new(self.config.clone());
        SpanGrid::compute(&mut calculator, &self.view())
    }
}
