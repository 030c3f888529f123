//! Encoded row representation consumed by the comparators.
//!
//! A row is a flat sequence of [`Value`]s ordered by column index. Repeated
//! columns contribute a contiguous run of values sharing one index; an absent
//! optional column contributes no value at all.

mod int96;
mod value;

pub use int96::Int96;
pub use value::{Payload, Value};

/// An owned encoded row.
pub type Row = Vec<Value>;
