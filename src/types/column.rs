use serde::{Deserialize, Serialize};

/// Kind of a table column. Index and selection columns carry no data and
/// are never merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Index,
    Selection,
    /// Any other `type`, or none at all
    #[default]
    #[serde(other)]
    Data,
}

/// A column as seen by the hosting table view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Row property rendered in this column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    /// Column kind (JSON `type`)
    #[serde(rename = "type", default)]
    pub kind: ColumnKind,
}

impl ColumnDescriptor {
    /// A data column bound to `property`.
    pub fn data(property: impl Into<String>) -> Self {
        Self {
            property: Some(property.into()),
            kind: ColumnKind::Data,
        }
    }

    /// A row-number column.
    pub fn index() -> Self {
        Self {
            property: None,
            kind: ColumnKind::Index,
        }
    }

    /// A checkbox column.
    pub fn selection() -> Self {
        Self {
            property: None,
            kind: ColumnKind::Selection,
        }
    }

    /// True for index and selection columns.
    pub fn is_non_data(&self) -> bool {
        matches!(self.kind, ColumnKind::Index | ColumnKind::Selection)
    }

    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }
}
