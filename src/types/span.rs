use serde::{Deserialize, Serialize};

/// How many rows and columns a cell occupies.
///
/// A zero on either axis means the cell is absorbed by an earlier owner and
/// must not be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpanResult {
    #[serde(rename = "rowspan")]
    pub row_span: u32,
    #[serde(rename = "colspan")]
    pub col_span: u32,
}

impl SpanResult {
    /// A plain, unmerged cell.
    pub const IDENTITY: Self = Self::new(1, 1);
    /// Continuation of a row-direction span.
    pub const ROW_HIDDEN: Self = Self::new(0, 0);
    /// Continuation of a column-direction span.
    pub const COL_HIDDEN: Self = Self::new(1, 0);

    pub const fn new(row_span: u32, col_span: u32) -> Self {
        Self { row_span, col_span }
    }

    /// True if the cell should be omitted from layout.
    pub fn is_hidden(&self) -> bool {
        self.row_span == 0 || self.col_span == 0
    }

    /// True if the cell owns a span larger than itself.
    pub fn is_owner(&self) -> bool {
        !self.is_hidden() && (self.row_span > 1 || self.col_span > 1)
    }
}

impl Default for SpanResult {
    fn default() -> Self {
        Self::IDENTITY
    }
}
