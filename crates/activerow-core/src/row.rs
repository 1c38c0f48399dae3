//! Raw row maps exchanged with the executor.

use std::collections::BTreeMap;

use crate::codec::Stored;

/// A name-keyed map of stored cells.
///
/// `Row` is used in both directions across the executor boundary: result rows
/// coming back from a fetch, and outbound data maps for inserts and updates.
/// Iteration order is the sorted column name order, so built statements are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: BTreeMap<String, Stored>,
}

impl Row {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell, replacing any previous value under the same name.
    pub fn set(&mut self, column: impl Into<String>, stored: Stored) {
        self.cells.insert(column.into(), stored);
    }

    /// Get a cell by column name.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Stored> {
        self.cells.get(column)
    }

    /// Whether the row holds a cell under this name.
    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the row holds no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate cells in column-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Stored)> {
        self.cells.iter().map(|(name, stored)| (name.as_str(), stored))
    }

    /// Merge another row's cells into this one, overwriting on collision.
    pub fn merge(&mut self, other: &Row) {
        for (name, stored) in other.iter() {
            self.cells.insert(name.to_string(), stored.clone());
        }
    }
}

impl FromIterator<(String, Stored)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Stored)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
