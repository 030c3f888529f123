//! Declarative sort keys.

use parquet::{format, schema::types::ColumnPath};
use thiserror::Error;

use crate::schema::{column_path, Schema};

#[derive(Debug, Error)]
pub enum SortingError {
    #[error("sorting column index {0} does not name a leaf column")]
    UnknownColumnIndex(i32),
}

/// One sort key: which column, in which direction, and where nulls go.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortingColumn {
    path: ColumnPath,
    descending: bool,
    nulls_first: bool,
}

impl SortingColumn {
    pub fn new(path: ColumnPath, descending: bool, nulls_first: bool) -> Self {
        Self {
            path,
            descending,
            nulls_first,
        }
    }

    pub fn ascending(path: impl Into<ColumnPath>) -> Self {
        Self::new(path.into(), false, false)
    }

    pub fn descending(path: impl Into<ColumnPath>) -> Self {
        Self::new(path.into(), true, false)
    }

    /// Sets whether nulls sort before non-null values.
    pub fn nulls_first(self, nulls_first: bool) -> Self {
        Self {
            nulls_first,
            ..self
        }
    }

    pub fn path(&self) -> &ColumnPath {
        &self.path
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }

    pub fn is_nulls_first(&self) -> bool {
        self.nulls_first
    }

    /// Resolves a row-group sorting column from parquet metadata.
    pub fn from_parquet(
        sorting: &format::SortingColumn,
        schema: &Schema,
    ) -> Result<Self, SortingError> {
        let leaf = u16::try_from(sorting.column_idx)
            .ok()
            .and_then(|index| schema.leaf(index))
            .ok_or(SortingError::UnknownColumnIndex(sorting.column_idx))?;
        Ok(Self::new(
            leaf.path().clone(),
            sorting.descending,
            sorting.nulls_first,
        ))
    }

    /// The parquet metadata form of this key, or `None` when the schema has
    /// no leaf at this path.
    pub fn to_parquet(&self, schema: &Schema) -> Option<format::SortingColumn> {
        schema.find(&self.path).map(|leaf| {
            format::SortingColumn::new(
                i32::from(leaf.column_index()),
                self.descending,
                self.nulls_first,
            )
        })
    }
}

/// Ascending key on a dotted column path.
pub fn ascending(dotted: &str) -> SortingColumn {
    SortingColumn::ascending(column_path(dotted))
}

/// Descending key on a dotted column path.
pub fn descending(dotted: &str) -> SortingColumn {
    SortingColumn::descending(column_path(dotted))
}

/// Index of the first entry whose path equals `path`.
pub(crate) fn search_sorting_column(
    sorting: &[SortingColumn],
    path: &ColumnPath,
) -> Option<usize> {
    sorting.iter().position(|column| &column.path == path)
}
