//! Column-to-field planning for both binding strategies
//!
//! A plan maps each input column to the field indexes it feeds. Descriptors
//! are fixed per record type, so the plan is computed once per bind and
//! reused for every row.

use crate::record::FieldDescriptor;

/// Column index to target field indexes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPlan {
    /// Field indexes fed by each column, in column order
    targets: Vec<Vec<usize>>,

    /// Header names with no matching field (name-based plans only)
    unmatched_columns: Vec<String>,
}

impl ColumnPlan {
    /// Token `i` goes to the `i`-th participating field in declaration order
    pub fn positional(descriptors: &[FieldDescriptor]) -> Self {
        let targets = descriptors
            .iter()
            .enumerate()
            .filter(|(_, d)| d.participates)
            .map(|(index, _)| vec![index])
            .collect();

        Self {
            targets,
            unmatched_columns: Vec::new(),
        }
    }

    /// Column `i` goes to every field whose bound name equals `header[i]`
    pub fn by_name<'h>(
        header: impl IntoIterator<Item = &'h str>,
        descriptors: &[FieldDescriptor],
    ) -> Self {
        let mut targets = Vec::new();
        let mut unmatched_columns = Vec::new();

        for name in header {
            let fields: Vec<usize> = descriptors
                .iter()
                .enumerate()
                .filter(|(_, d)| d.binds_to(name))
                .map(|(index, _)| index)
                .collect();

            if fields.is_empty() {
                unmatched_columns.push(name.to_string());
            }
            targets.push(fields);
        }

        Self {
            targets,
            unmatched_columns,
        }
    }

    /// Number of columns the plan covers
    pub fn width(&self) -> usize {
        self.targets.len()
    }

    /// Field indexes fed by `column`; empty when the column is ignored
    pub fn targets(&self, column: usize) -> &[usize] {
        self.targets.get(column).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn unmatched_columns(&self) -> &[String] {
        &self.unmatched_columns
    }

    /// (columns, columns feeding at least one field, total field assignments)
    pub fn stats(&self) -> (usize, usize, usize) {
        (
            self.targets.len(),
            self.targets.iter().filter(|t| !t.is_empty()).count(),
            self.targets.iter().map(Vec::len).sum(),
        )
    }
}
