//! Viewport state for virtualized tables.
//!
//! A virtualized table only materializes rows `[start_index, end_index)` of
//! its dataset. Row positions handed to the span calculator are relative to
//! that window; the window translates them back to global dataset indices.

use serde::{Deserialize, Serialize};

use crate::types::Row;

/// Global row range currently rendered (half-open).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportWindow {
    /// First rendered row in the full dataset
    pub start_index: usize,
    /// One past the last rendered row in the full dataset
    pub end_index: usize,
}

impl ViewportWindow {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
        }
    }

    /// Number of rendered rows.
    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Translate a page-local row position into a global dataset index.
    pub fn global_index(&self, row_index: usize) -> usize {
        self.start_index.saturating_add(row_index)
    }

    /// Rows left in the window from `global_index` (inclusive) to the end.
    pub fn remaining_from(&self, global_index: usize) -> usize {
        self.end_index.saturating_sub(global_index)
    }

    /// Clamp the window to a dataset of `len` rows, keeping `start <= end`.
    #[must_use]
    pub fn clamped(self, len: usize) -> Self {
        let end_index = self.end_index.min(len);
        Self {
            start_index: self.start_index.min(end_index),
            end_index,
        }
    }
}

/// A rendered window together with the dataset slices it refers to.
#[derive(Debug, Clone, Copy)]
pub struct VirtualWindow<'a> {
    pub range: ViewportWindow,
    /// Rows currently materialized by the table
    pub visible: &'a [Row],
    /// Full backing dataset
    pub all: &'a [Row],
}

impl<'a> VirtualWindow<'a> {
    /// A table with no virtualization: everything is visible.
    pub fn unvirtualized(rows: &'a [Row]) -> Self {
        Self {
            range: ViewportWindow::new(0, rows.len()),
            visible: rows,
            all: rows,
        }
    }

    /// Window over `all` for the given range. The range is clamped to the
    /// dataset so the visible slice always exists.
    pub fn over(all: &'a [Row], range: ViewportWindow) -> Self {
        let range = range.clamped(all.len());
        let visible = all.get(range.start_index..range.end_index).unwrap_or(&[]);
        Self {
            range,
            visible,
            all,
        }
    }

    /// Build from explicit parts, as a virtualization layer reports them.
    pub fn from_parts(range: ViewportWindow, visible: &'a [Row], all: &'a [Row]) -> Self {
        Self {
            range,
            visible,
            all,
        }
    }

    pub fn start_index(&self) -> usize {
        self.range.start_index
    }

    pub fn end_index(&self) -> usize {
        self.range.end_index
    }

    /// Row at a page-local position.
    pub fn visible_row(&self, row_index: usize) -> Option<&'a Row> {
        self.visible.get(row_index)
    }

    /// Row at a global dataset index.
    pub fn row_at(&self, global_index: usize) -> Option<&'a Row> {
        self.all.get(global_index)
    }
}
