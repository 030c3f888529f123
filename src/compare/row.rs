//! Synthesis of multi-key row comparators.

use std::{cmp::Ordering, fmt, sync::Arc};

use super::{
    combinator::{self, ValueComparator},
    primitive::ValueCompare,
    scan,
};
use crate::{
    logging::synth_log,
    option::SortOptions,
    record::Value,
    schema::{Leaf, Schema},
    sorting::{search_sorting_column, SortingColumn},
};

/// Builds a comparator for `sorting` over rows of `schema` with default options.
///
/// Sorting columns that name no leaf of the schema are skipped. When none of
/// them match, the result treats every pair of rows as equal; see
/// [`RowComparator::is_unordered`].
pub fn build_comparator(schema: &Schema, sorting: &[SortingColumn]) -> RowComparator {
    RowComparator::new(schema, &SortOptions::from(sorting))
}

/// Ordering over encoded rows, synthesized once from a schema and sort keys.
///
/// Cloning is cheap and the comparator can be shared across threads.
#[derive(Clone)]
pub struct RowComparator {
    plan: Arc<Plan>,
}

enum Plan {
    Unordered,
    Single(ColumnOrder),
    Columns(Box<[ColumnOrder]>),
}

/// Per-key comparison strategy, chosen once per matched leaf.
enum ColumnOrder {
    /// Required column of a schema without repeated leaves.
    IndexAscending {
        column_index: u16,
        compare: ValueCompare,
    },
    IndexDescending {
        column_index: u16,
        compare: ValueCompare,
    },
    /// Optional or repeated column, or any column of a schema with repeated leaves.
    Scan {
        column_index: u16,
        compare: ValueComparator,
    },
}

impl RowComparator {
    pub fn new(schema: &Schema, options: &SortOptions) -> Self {
        let sorting = options.sorting_columns.as_slice();
        let direct = options.direct_access && schema.is_direct();
        let mut columns: Vec<Option<ColumnOrder>> = (0..sorting.len()).map(|_| None).collect();

        for leaf in schema.leaves() {
            let Some(position) = search_sorting_column(sorting, leaf.path()) else {
                continue;
            };
            if columns[position].is_some() {
                continue;
            }
            let order = ColumnOrder::for_leaf(leaf, &sorting[position], direct);
            synth_log!(
                "sort_column_matched",
                "path={} column_index={} strategy={}",
                leaf.path().string(),
                leaf.column_index(),
                order.strategy(),
            );
            columns[position] = Some(order);
        }

        for (sorting_column, _) in sorting
            .iter()
            .zip(columns.iter())
            .filter(|(_, order)| order.is_none())
        {
            synth_log!(
                "sort_column_dropped",
                "path={}",
                sorting_column.path().string(),
            );
        }

        let mut columns = columns.into_iter().flatten().collect::<Vec<_>>();
        synth_log!(
            "row_comparator_built",
            "requested_keys={} effective_keys={} direct={}",
            sorting.len(),
            columns.len(),
            direct,
        );

        let plan = match columns.len() {
            0 => Plan::Unordered,
            1 => Plan::Single(columns.remove(0)),
            _ => Plan::Columns(columns.into_boxed_slice()),
        };
        Self {
            plan: Arc::new(plan),
        }
    }

    /// Compares two rows of the schema this comparator was built for.
    #[inline]
    pub fn compare(&self, row1: &[Value], row2: &[Value]) -> Ordering {
        match &*self.plan {
            Plan::Unordered => Ordering::Equal,
            Plan::Single(order) => order.compare(row1, row2),
            Plan::Columns(orders) => {
                for order in orders.iter() {
                    let cmp = order.compare(row1, row2);
                    if cmp != Ordering::Equal {
                        return cmp;
                    }
                }
                Ordering::Equal
            }
        }
    }

    /// Whether no sorting column matched the schema, so all rows compare equal.
    pub fn is_unordered(&self) -> bool {
        matches!(*self.plan, Plan::Unordered)
    }

    /// Number of sort keys that matched a leaf of the schema.
    pub fn num_keys(&self) -> usize {
        match &*self.plan {
            Plan::Unordered => 0,
            Plan::Single(_) => 1,
            Plan::Columns(orders) => orders.len(),
        }
    }
}

impl fmt::Debug for RowComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: &[ColumnOrder] = match &*self.plan {
            Plan::Unordered => &[],
            Plan::Single(order) => std::slice::from_ref(order),
            Plan::Columns(orders) => orders,
        };
        f.debug_list()
            .entries(
                keys.iter()
                    .map(|order| (order.column_index(), order.strategy())),
            )
            .finish()
    }
}

impl ColumnOrder {
    fn for_leaf(leaf: &Leaf, sorting: &SortingColumn, direct: bool) -> Self {
        let column_index = leaf.column_index();
        let base = leaf.column_type().compare_fn();

        if direct && !leaf.is_optional() {
            return if sorting.is_descending() {
                ColumnOrder::IndexDescending {
                    column_index,
                    compare: base,
                }
            } else {
                ColumnOrder::IndexAscending {
                    column_index,
                    compare: base,
                }
            };
        }

        let mut compare = combinator::from_fn(base);
        if sorting.is_descending() {
            compare = combinator::descending(compare);
        }
        if leaf.is_optional() {
            compare = if sorting.is_nulls_first() {
                combinator::nulls_first(compare)
            } else {
                combinator::nulls_last(compare)
            };
        }
        ColumnOrder::Scan {
            column_index,
            compare,
        }
    }

    #[inline]
    fn compare(&self, row1: &[Value], row2: &[Value]) -> Ordering {
        match self {
            ColumnOrder::IndexAscending {
                column_index,
                compare,
            } => compare_index(*column_index, compare, row1, row2),
            ColumnOrder::IndexDescending {
                column_index,
                compare,
            } => compare_index(*column_index, |a, b| compare(a, b).reverse(), row1, row2),
            ColumnOrder::Scan {
                column_index,
                compare,
            } => scan::compare_column(*column_index, &**compare, row1, row2),
        }
    }

    fn column_index(&self) -> u16 {
        match self {
            ColumnOrder::IndexAscending { column_index, .. }
            | ColumnOrder::IndexDescending { column_index, .. }
            | ColumnOrder::Scan { column_index, .. } => *column_index,
        }
    }

    fn strategy(&self) -> &'static str {
        match self {
            ColumnOrder::IndexAscending { .. } => "index_asc",
            ColumnOrder::IndexDescending { .. } => "index_desc",
            ColumnOrder::Scan { .. } => "scan",
        }
    }
}

/// Reads the column's value by position, looking it up instead when the row
/// does not hold it at its column index.
#[inline]
fn value_at(row: &[Value], column_index: u16) -> Option<&Value> {
    match row.get(usize::from(column_index)) {
        Some(value) if value.column_index() == column_index => Some(value),
        _ => row.iter().find(|value| value.column_index() == column_index),
    }
}

#[inline]
fn compare_index<F>(column_index: u16, compare: F, row1: &[Value], row2: &[Value]) -> Ordering
where
    F: Fn(&Value, &Value) -> Ordering,
{
    match (value_at(row1, column_index), value_at(row2, column_index)) {
        (Some(a), Some(b)) => compare(a, b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}
