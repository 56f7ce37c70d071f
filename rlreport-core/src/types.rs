//! Domain types for column-oriented report data.
//!
//! A [`ColumnSet`] is stored in a `BTreeMap`, so every traversal yields the
//! columns in ascending lexicographic order of their names. Callers never
//! need to sort column names themselves.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MalformedInput;

// ---------------------------------------------------------------------------
// ColumnSet
// ---------------------------------------------------------------------------

/// Column-oriented tabular data: one sequence of cell values per column,
/// aligned by row index.
///
/// Serializes as a plain mapping of column name to a list of strings:
///
/// ```yaml
/// agent: [Pacman_0, Pacman_1]
/// policy_reward_mean: ["11.15", "23.81"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSet {
    columns: BTreeMap<String, Vec<String>>,
}

impl ColumnSet {
    /// An empty column set. Rendering it fails with [`MalformedInput::NoColumns`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a column. Returns the previous values, if any.
    pub fn insert<N, I, V>(&mut self, name: N, values: I) -> Option<Vec<String>>
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.columns
            .insert(name.into(), values.into_iter().map(Into::into).collect())
    }

    /// Column names in ascending order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Values of a single column.
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// `(name, values)` pairs in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Check the equal-length invariant and return the shared row count.
    ///
    /// The first column (in sorted order) sets the expected length; the
    /// first column that disagrees is reported.
    pub fn validate(&self) -> Result<usize, MalformedInput> {
        let mut iter = self.iter();
        let (_, first) = iter.next().ok_or(MalformedInput::NoColumns)?;
        let expected = first.len();
        for (name, values) in iter {
            if values.len() != expected {
                return Err(MalformedInput::RaggedColumns {
                    column: name.to_owned(),
                    expected,
                    found: values.len(),
                });
            }
        }
        Ok(expected)
    }
}

impl<N, I, V> FromIterator<(N, I)> for ColumnSet
where
    N: Into<String>,
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        let mut set = ColumnSet::new();
        for (name, values) in iter {
            set.insert(name, values);
        }
        set
    }
}

impl From<BTreeMap<String, Vec<String>>> for ColumnSet {
    fn from(columns: BTreeMap<String, Vec<String>>) -> Self {
        Self { columns }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
