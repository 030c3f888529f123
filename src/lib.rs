//! Row ordering for Tonbo's columnar row groups.
//!
//! Given a flattened schema and a list of sorting columns, this crate
//! synthesizes a single [`RowComparator`] over encoded rows. The comparator is
//! built once and then used for every comparison made while sorting row
//! groups, merging sorted runs or checking that persisted data is in order.
//!
//! ```
//! use tonbo_order::{
//!     build_comparator,
//!     schema::{column_path, ColumnType, Leaf, Schema},
//!     sorting::ascending,
//!     Value,
//! };
//!
//! let schema = Schema::new(vec![Leaf::new(column_path("id"), 0, ColumnType::Int64)]);
//! let comparator = build_comparator(&schema, &[ascending("id")]);
//!
//! let r1 = vec![Value::int64(0, 5)];
//! let r2 = vec![Value::int64(0, 3)];
//! assert!(comparator.compare(&r1, &r2).is_gt());
//! ```

mod logging;

/// Value and row comparators.
pub mod compare;
/// Helpers operating on whole sets of rows.
pub mod merge;
pub mod option;
pub mod record;
pub mod schema;
pub mod sorting;

pub use compare::{build_comparator, RowComparator};
pub use merge::{is_sorted, sort_rows, MergeRows};
pub use option::SortOptions;
pub use record::{Int96, Payload, Row, Value};
pub use schema::{ColumnType, Leaf, Schema, SchemaError};
pub use sorting::{SortingColumn, SortingError};
