//! Ordered label-to-code mapping tables.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Known canonical labels and the codes they resolve to.
///
/// Entries keep their insertion order, which decides the winner when several
/// labels satisfy a soft match. Labels are unique; inserting an existing
/// label replaces its code but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingTable {
    entries: IndexMap<String, String>,
}

impl MappingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry, returning the previous code for `label`.
    pub fn insert(&mut self, label: impl Into<String>, code: impl Into<String>) -> Option<String> {
        self.entries.insert(label.into(), code.into())
    }

    /// Code stored under exactly `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    /// Iterate `(label, code)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(label, code)| (label.as_str(), code.as_str()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L, C> FromIterator<(L, C)> for MappingTable
where
    L: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, C)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (label, code) in iter {
            table.insert(label, code);
        }
        table
    }
}

impl<L, C, const N: usize> From<[(L, C); N]> for MappingTable
where
    L: Into<String>,
    C: Into<String>,
{
    fn from(pairs: [(L, C); N]) -> Self {
        pairs.into_iter().collect()
    }
}
