//! Merge configuration.
//!
//! JSON field names match what table views already pass around:
//!
//! ```json
//! { "props": ["region", "city"], "direction": "row", "auto": false }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SpanError};

/// Axis along which equal adjacent values are merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeDirection {
    #[default]
    Row,
    Column,
    Both,
}

impl MergeDirection {
    pub fn includes_rows(self) -> bool {
        matches!(self, Self::Row | Self::Both)
    }

    pub fn includes_columns(self) -> bool {
        matches!(self, Self::Column | Self::Both)
    }
}

impl FromStr for MergeDirection {
    type Err = SpanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "row" => Ok(Self::Row),
            "column" => Ok(Self::Column),
            "both" => Ok(Self::Both),
            _ => Err(SpanError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for MergeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Row => "row",
            Self::Column => "column",
            Self::Both => "both",
        })
    }
}

/// Which columns merge, and in which direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Properties eligible for merging; empty means every data column
    pub props: Vec<String>,
    pub direction: MergeDirection,
    /// Merge every column regardless of `props`
    pub auto: bool,
}

impl MergeConfig {
    /// Row-direction merging on every data column.
    pub fn rows() -> Self {
        Self::default()
    }

    /// Column-direction merging on every data column.
    pub fn columns() -> Self {
        Self {
            direction: MergeDirection::Column,
            ..Self::default()
        }
    }

    /// Row merging with column merging as a fallback.
    pub fn both() -> Self {
        Self {
            direction: MergeDirection::Both,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_props<I, S>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.props = props.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_auto(mut self, auto: bool) -> Self {
        self.auto = auto;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether cells in `property` may take part in a merge.
    pub fn is_eligible(&self, property: &str) -> bool {
        self.auto || self.props.is_empty() || self.props.iter().any(|p| p == property)
    }
}
