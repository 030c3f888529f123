//! Decorators layered over a value comparator.
//!
//! Wrappers are built once during synthesis. Null placement is meant to sit
//! outside [`descending`] so that "nulls first" holds for both directions.

use std::{cmp::Ordering, sync::Arc};

use super::primitive::ValueCompare;
use crate::record::Value;

/// Shared, thread-safe value comparator.
pub type ValueComparator = Arc<dyn Fn(&Value, &Value) -> Ordering + Send + Sync>;

/// Lift a plain comparison function into a [`ValueComparator`].
pub fn from_fn(compare: ValueCompare) -> ValueComparator {
    Arc::new(compare)
}

/// Inverts the order of `compare`.
pub fn descending(compare: ValueComparator) -> ValueComparator {
    Arc::new(move |a: &Value, b: &Value| compare(a, b).reverse())
}

/// Nulls sort before every non-null value; two nulls are equal.
pub fn nulls_first(compare: ValueComparator) -> ValueComparator {
    Arc::new(move |a: &Value, b: &Value| match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => compare(a, b),
    })
}

/// Nulls sort after every non-null value; two nulls are equal.
pub fn nulls_last(compare: ValueComparator) -> ValueComparator {
    Arc::new(move |a: &Value, b: &Value| match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => compare(a, b),
    })
}
