use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::CellValue;

/// One record of a table's dataset, keyed by column property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    values: HashMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<CellValue>) {
        self.values.insert(property.into(), value.into());
    }

    /// Value at `property`, `None` when the row does not carry it.
    pub fn get(&self, property: &str) -> Option<&CellValue> {
        self.values.get(property)
    }

    /// Strict comparison of this row's value at `property` with `value`.
    ///
    /// Two absent values are equal; absent never equals a present value.
    pub fn value_eq(&self, property: &str, value: Option<&CellValue>) -> bool {
        self.get(property) == value
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
