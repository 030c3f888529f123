use crate::sorting::SortingColumn;

/// Options controlling how a row comparator is synthesized.
#[derive(Debug, Clone)]
pub struct SortOptions {
    pub(crate) sorting_columns: Vec<SortingColumn>,
    pub(crate) direct_access: bool,
}

impl From<Vec<SortingColumn>> for SortOptions {
    fn from(sorting_columns: Vec<SortingColumn>) -> Self {
        SortOptions {
            sorting_columns,
            direct_access: true,
        }
    }
}

impl From<&[SortingColumn]> for SortOptions {
    fn from(sorting_columns: &[SortingColumn]) -> Self {
        SortOptions::from(sorting_columns.to_vec())
    }
}

impl SortOptions {
    pub fn sorting_columns(self, sorting_columns: Vec<SortingColumn>) -> Self {
        SortOptions {
            sorting_columns,
            ..self
        }
    }

    /// Appends a lower-precedence sort key.
    pub fn then_by(mut self, sorting_column: SortingColumn) -> Self {
        self.sorting_columns.push(sorting_column);
        self
    }

    /// Allows required columns of schemas without repeated leaves to be read by
    /// position instead of scanned for. Enabled by default.
    pub fn direct_access(self, direct_access: bool) -> Self {
        SortOptions {
            direct_access,
            ..self
        }
    }

    pub fn get_sorting_columns(&self) -> &[SortingColumn] {
        &self.sorting_columns
    }
}

#[cfg(test)]
mod tests {
    use super::SortOptions;
    use crate::sorting::{ascending, descending};

    #[test]
    fn builder_keeps_key_order() {
        let options = SortOptions::from(vec![ascending("a")])
            .then_by(descending("b"))
            .direct_access(false);
        assert!(!options.direct_access);
        assert_eq!(
            options.get_sorting_columns(),
            &[ascending("a"), descending("b")]
        );
    }

    #[test]
    fn direct_access_defaults_on() {
        let options = SortOptions::from(&[ascending("a")][..]);
        assert!(options.direct_access);
        let options = options.sorting_columns(Vec::new());
        assert!(options.get_sorting_columns().is_empty());
    }
}
