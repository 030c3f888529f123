//! Total orders for each scalar kind.
//!
//! Every function here is pure. Floating point comparison falls back to
//! `Equal` when either side is NaN.

use std::cmp::Ordering;

use crate::record::{Int96, Value};

/// Comparator over two values of the same column.
pub type ValueCompare = fn(&Value, &Value) -> Ordering;

pub fn compare_bool(v1: bool, v2: bool) -> Ordering {
    v1.cmp(&v2)
}

pub fn compare_int32(v1: i32, v2: i32) -> Ordering {
    v1.cmp(&v2)
}

pub fn compare_int64(v1: i64, v2: i64) -> Ordering {
    v1.cmp(&v2)
}

pub fn compare_uint32(v1: u32, v2: u32) -> Ordering {
    v1.cmp(&v2)
}

pub fn compare_uint64(v1: u64, v2: u64) -> Ordering {
    v1.cmp(&v2)
}

pub fn compare_int96(v1: Int96, v2: Int96) -> Ordering {
    if v1.less(&v2) {
        Ordering::Less
    } else if v2.less(&v1) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

pub fn compare_float32(v1: f32, v2: f32) -> Ordering {
    v1.partial_cmp(&v2).unwrap_or(Ordering::Equal)
}

pub fn compare_float64(v1: f64, v2: f64) -> Ordering {
    v1.partial_cmp(&v2).unwrap_or(Ordering::Equal)
}

/// Compares 16-byte blocks as two big-endian `u64` halves, high half first.
///
/// The result matches an unsigned big-endian byte-wise comparison.
pub fn compare_be128(v1: &[u8; 16], v2: &[u8; 16]) -> Ordering {
    let (hi1, lo1) = split_be128(v1);
    let (hi2, lo2) = split_be128(v2);
    hi1.cmp(&hi2).then_with(|| lo1.cmp(&lo2))
}

pub fn less_be128(v1: &[u8; 16], v2: &[u8; 16]) -> bool {
    compare_be128(v1, v2) == Ordering::Less
}

fn split_be128(v: &[u8; 16]) -> (u64, u64) {
    let mut hi = [0u8; 8];
    let mut lo = [0u8; 8];
    hi.copy_from_slice(&v[..8]);
    lo.copy_from_slice(&v[8..]);
    (u64::from_be_bytes(hi), u64::from_be_bytes(lo))
}

pub(crate) fn compare_bool_values(a: &Value, b: &Value) -> Ordering {
    compare_bool(a.as_boolean(), b.as_boolean())
}

pub(crate) fn compare_int32_values(a: &Value, b: &Value) -> Ordering {
    compare_int32(a.as_int32(), b.as_int32())
}

pub(crate) fn compare_int64_values(a: &Value, b: &Value) -> Ordering {
    compare_int64(a.as_int64(), b.as_int64())
}

pub(crate) fn compare_uint32_values(a: &Value, b: &Value) -> Ordering {
    compare_uint32(a.as_uint32(), b.as_uint32())
}

pub(crate) fn compare_uint64_values(a: &Value, b: &Value) -> Ordering {
    compare_uint64(a.as_uint64(), b.as_uint64())
}

pub(crate) fn compare_int96_values(a: &Value, b: &Value) -> Ordering {
    compare_int96(a.as_int96(), b.as_int96())
}

pub(crate) fn compare_float32_values(a: &Value, b: &Value) -> Ordering {
    compare_float32(a.as_float(), b.as_float())
}

pub(crate) fn compare_float64_values(a: &Value, b: &Value) -> Ordering {
    compare_float64(a.as_double(), b.as_double())
}

pub(crate) fn compare_bytes_values(a: &Value, b: &Value) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

pub(crate) fn compare_be128_values(a: &Value, b: &Value) -> Ordering {
    match (
        <&[u8; 16]>::try_from(a.as_bytes()),
        <&[u8; 16]>::try_from(b.as_bytes()),
    ) {
        (Ok(x), Ok(y)) => compare_be128(x, y),
        // short blocks only come from malformed rows
        _ => compare_bytes_values(a, b),
    }
}
