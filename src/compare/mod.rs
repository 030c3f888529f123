//! Value and row comparison.
//!
//! [`build_comparator`] walks a [`Schema`](crate::schema::Schema) once and
//! turns a list of sorting columns into a single [`RowComparator`]. Required
//! columns of schemas without repeated leaves are read by position; every
//! other column is located by scanning the row for its column index.

pub mod combinator;
pub mod primitive;
mod row;
mod scan;

pub use combinator::{descending, nulls_first, nulls_last, ValueComparator};
pub use primitive::{compare_be128, less_be128, ValueCompare};
pub use row::{build_comparator, RowComparator};
