//! Column-value locator for rows where positional addressing is unsafe.

use std::cmp::Ordering;

use crate::record::Value;

/// Compares the values of `column_index` carried by two rows.
///
/// Both rows are scanned in lockstep, one value of the column at a time. A row
/// that runs out of values first sorts first, which orders repeated columns
/// lexicographically and puts an absent column before a present one. Rows
/// with no value on either side compare equal.
pub(crate) fn compare_column<F>(
    column_index: u16,
    compare: F,
    row1: &[Value],
    row2: &[Value],
) -> Ordering
where
    F: Fn(&Value, &Value) -> Ordering,
{
    let mut i1 = 0;
    let mut i2 = 0;

    loop {
        while i1 < row1.len() && row1[i1].column_index() != column_index {
            i1 += 1;
        }
        while i2 < row2.len() && row2[i2].column_index() != column_index {
            i2 += 1;
        }

        match (i1 == row1.len(), i2 == row2.len()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {
                let cmp = compare(&row1[i1], &row2[i2]);
                if cmp != Ordering::Equal {
                    return cmp;
                }
            }
        }

        i1 += 1;
        i2 += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::compare_column;
    use crate::{
        compare::{
            combinator::{from_fn, nulls_first, nulls_last},
            primitive::{compare_bytes_values, compare_int64_values},
        },
        record::Value,
    };

    #[test]
    fn prefix_run_sorts_first() {
        let r1 = vec![Value::byte_array(1, "a"), Value::byte_array(1, "b")];
        let r2 = vec![Value::byte_array(1, "a")];
        assert_eq!(
            compare_column(1, compare_bytes_values, &r1, &r2),
            Ordering::Greater
        );
        assert_eq!(
            compare_column(1, compare_bytes_values, &r2, &r1),
            Ordering::Less
        );
    }

    #[test]
    fn later_element_breaks_tie() {
        let r1 = vec![
            Value::int64(0, 9),
            Value::int64(2, 1),
            Value::int64(2, 5),
            Value::int64(3, 0),
        ];
        let r2 = vec![
            Value::int64(0, 1),
            Value::int64(2, 1),
            Value::int64(2, 4),
            Value::int64(2, 100),
        ];
        assert_eq!(
            compare_column(2, compare_int64_values, &r1, &r2),
            Ordering::Greater
        );
    }

    #[test]
    fn absent_on_both_sides_is_equal() {
        let r1 = vec![Value::int64(0, 1)];
        let r2 = vec![Value::int64(0, 2), Value::int64(4, 2)];
        assert_eq!(
            compare_column(3, compare_int64_values, &r1, &r2),
            Ordering::Equal
        );
        assert_eq!(
            compare_column(3, compare_int64_values, &[], &[]),
            Ordering::Equal
        );
    }

    #[test]
    fn absent_sorts_before_present() {
        let r1 = vec![Value::int64(0, 1)];
        let r2 = vec![Value::int64(0, 1), Value::int64(1, -100)];
        assert_eq!(
            compare_column(1, compare_int64_values, &r1, &r2),
            Ordering::Less
        );
    }

    #[test]
    fn explicit_nulls_follow_placement() {
        let r1 = vec![Value::null(1)];
        let r2 = vec![Value::int64(1, 0)];

        let first = nulls_first(from_fn(compare_int64_values));
        assert_eq!(compare_column(1, &*first, &r1, &r2), Ordering::Less);

        let last = nulls_last(from_fn(compare_int64_values));
        assert_eq!(compare_column(1, &*last, &r1, &r2), Ordering::Greater);
    }
}
