//! Sorting, validation and k-way merging of rows under a [`RowComparator`].

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use crate::{compare::RowComparator, record::Row};

/// Stable in-place sort.
pub fn sort_rows(rows: &mut [Row], comparator: &RowComparator) {
    rows.sort_by(|row1, row2| comparator.compare(row1, row2));
}

/// Index of the first row that sorts before its predecessor.
pub fn first_unsorted(rows: &[Row], comparator: &RowComparator) -> Option<usize> {
    rows.windows(2)
        .position(|pair| comparator.compare(&pair[0], &pair[1]) == Ordering::Greater)
        .map(|position| position + 1)
}

pub fn is_sorted(rows: &[Row], comparator: &RowComparator) -> bool {
    first_unsorted(rows, comparator).is_none()
}

/// Merges runs that are each sorted under the same comparator.
///
/// Rows comparing equal are yielded in run order, so merging is stable.
pub struct MergeRows<'a, I>
where
    I: Iterator<Item = Row>,
{
    runs: Vec<I>,
    peeked: BinaryHeap<Reverse<HeapEntry<'a>>>,
    comparator: &'a RowComparator,
}

impl<'a, I> MergeRows<'a, I>
where
    I: Iterator<Item = Row>,
{
    pub fn new<R, T>(runs: R, comparator: &'a RowComparator) -> Self
    where
        R: IntoIterator<Item = T>,
        T: IntoIterator<IntoIter = I, Item = Row>,
    {
        let mut runs = runs
            .into_iter()
            .map(IntoIterator::into_iter)
            .collect::<Vec<_>>();
        let mut peeked = BinaryHeap::with_capacity(runs.len());
        for (run, rows) in runs.iter_mut().enumerate() {
            if let Some(row) = rows.next() {
                peeked.push(Reverse(HeapEntry::new(run, row, comparator)));
            }
        }
        Self {
            runs,
            peeked,
            comparator,
        }
    }
}

impl<I> Iterator for MergeRows<'_, I>
where
    I: Iterator<Item = Row>,
{
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        let Reverse(entry) = self.peeked.pop()?;
        if let Some(next) = self.runs[entry.run].next() {
            self.peeked
                .push(Reverse(HeapEntry::new(entry.run, next, self.comparator)));
        }
        Some(entry.row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.peeked.len(), None)
    }
}

struct HeapEntry<'a> {
    run: usize,
    row: Row,
    comparator: &'a RowComparator,
}

impl<'a> HeapEntry<'a> {
    fn new(run: usize, row: Row, comparator: &'a RowComparator) -> Self {
        Self {
            run,
            row,
            comparator,
        }
    }
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparator
            .compare(&self.row, &other.row)
            .then_with(|| self.run.cmp(&other.run))
    }
}

#[cfg(test)]
mod tests {
    use super::{first_unsorted, is_sorted, sort_rows, MergeRows};
    use crate::{
        compare::build_comparator,
        record::{Row, Value},
        schema::{column_path, ColumnType, Leaf, Schema},
        sorting::{ascending, descending},
        RowComparator,
    };

    fn schema() -> Schema {
        Schema::new(vec![
            Leaf::new(column_path("k"), 0, ColumnType::Int64),
            Leaf::new(column_path("v"), 1, ColumnType::ByteArray).optional(),
        ])
    }

    fn row(k: i64, v: Option<&'static str>) -> Row {
        let mut row = vec![Value::int64(0, k)];
        row.push(match v {
            Some(v) => Value::byte_array(1, v),
            None => Value::null(1),
        });
        row
    }

    fn keys(rows: &[Row]) -> Vec<i64> {
        rows.iter().map(|row| row[0].as_int64()).collect()
    }

    fn comparator() -> RowComparator {
        build_comparator(&schema(), &[ascending("k")])
    }

    #[test]
    fn sort_is_stable() {
        let mut rows = vec![
            row(2, Some("first")),
            row(1, None),
            row(2, Some("second")),
            row(0, None),
        ];
        let cmp = comparator();
        sort_rows(&mut rows, &cmp);
        assert_eq!(keys(&rows), vec![0, 1, 2, 2]);
        assert_eq!(rows[2][1].as_bytes(), b"first");
        assert_eq!(rows[3][1].as_bytes(), b"second");
        assert!(is_sorted(&rows, &cmp));
    }

    #[test]
    fn finds_first_out_of_order_row() {
        let cmp = comparator();
        let rows = vec![row(1, None), row(3, None), row(2, None), row(0, None)];
        assert_eq!(first_unsorted(&rows, &cmp), Some(2));
        assert!(!is_sorted(&rows, &cmp));
        assert_eq!(first_unsorted(&[], &cmp), None);
        assert_eq!(first_unsorted(&rows[..1], &cmp), None);
    }

    #[test]
    fn nulls_first_descending_sort() {
        let cmp = build_comparator(
            &schema(),
            &[descending("v").nulls_first(true), ascending("k")],
        );
        let mut rows = vec![
            row(1, Some("a")),
            row(2, None),
            row(3, Some("c")),
            row(0, None),
        ];
        sort_rows(&mut rows, &cmp);
        assert_eq!(keys(&rows), vec![0, 2, 3, 1]);
    }

    #[test]
    fn merge_sorted_runs() {
        let cmp = comparator();
        let runs = vec![
            vec![row(1, Some("a0")), row(4, None), row(7, None)],
            vec![],
            vec![row(1, Some("c0")), row(2, None), row(9, None)],
            vec![row(1, Some("d0")), row(5, None)],
        ];
        let merged = MergeRows::new(runs, &cmp).collect::<Vec<_>>();
        assert_eq!(keys(&merged), vec![1, 1, 1, 2, 4, 5, 7, 9]);
        let ties = merged[..3]
            .iter()
            .map(|row| row[1].as_bytes().to_vec())
            .collect::<Vec<_>>();
        assert_eq!(ties, vec![b"a0".to_vec(), b"c0".to_vec(), b"d0".to_vec()]);
        assert!(is_sorted(&merged, &cmp));
    }

    #[test]
    fn merges_share_one_borrowed_comparator() {
        let cmp = comparator();
        let parity = |offset: i64| {
            let run = (0..4).map(|k| row(k * 2 + offset, None)).collect::<Vec<_>>();
            MergeRows::new([run], &cmp)
        };
        let merged = MergeRows::new([parity(0), parity(1)], &cmp).collect::<Vec<_>>();
        assert_eq!(keys(&merged), (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn merge_matches_full_sort() {
        let cmp = build_comparator(&schema(), &[descending("k")]);
        let mut rng = fastrand::Rng::with_seed(99);
        let mut all = Vec::new();
        let runs = (0..5)
            .map(|_| {
                let mut run = (0..rng.usize(0..20))
                    .map(|_| row(rng.i64(-10..10), None))
                    .collect::<Vec<_>>();
                sort_rows(&mut run, &cmp);
                all.extend(run.iter().cloned());
                run
            })
            .collect::<Vec<_>>();
        sort_rows(&mut all, &cmp);

        let merged = MergeRows::new(runs, &cmp).collect::<Vec<_>>();
        assert_eq!(keys(&merged), keys(&all));
    }
}
