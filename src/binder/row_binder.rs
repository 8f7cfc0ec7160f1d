//! Row binding: one record per input row, appended in input order.
//!
//! Both strategies share one loop. The strategy only decides how the
//! [`ColumnPlan`] is built and whether the first row is a header.

use csv::StringRecord;
use std::fmt;
use tracing::debug;

use super::coercer::{FieldCoercer, FieldOutcome};
use super::column_plan::ColumnPlan;
use super::stats::BindStats;
use crate::config::UnsupportedKindPolicy;
use crate::record::{FieldDescriptor, Record};
use crate::{Error, Result};

/// How columns are matched to fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindStrategy {
    /// Columns fill participating fields in declaration order; no header
    Positional,
    /// First row is a header; columns bind to fields by declared name
    ByName,
}

impl fmt::Display for BindStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindStrategy::Positional => f.write_str("positional"),
            BindStrategy::ByName => f.write_str("by-name"),
        }
    }
}

/// Turns tokenized rows into records
#[derive(Debug, Clone, Copy)]
pub struct RowBinder {
    strategy: BindStrategy,
    coercer: FieldCoercer,
}

impl RowBinder {
    pub fn new(strategy: BindStrategy, unsupported: UnsupportedKindPolicy) -> Self {
        Self {
            strategy,
            coercer: FieldCoercer::new(unsupported),
        }
    }

    pub fn strategy(&self) -> BindStrategy {
        self.strategy
    }

    /// Bind every row, creating each record with `make` and appending it to
    /// `out` once all of its fields are written.
    ///
    /// On error the failing row's record is dropped and binding stops.
    /// Records from earlier rows stay in `out`.
    pub fn bind<R, E, F>(
        &self,
        rows: &[StringRecord],
        mut make: F,
        out: &mut Vec<E>,
    ) -> Result<BindStats>
    where
        R: Record,
        E: From<R>,
        F: FnMut() -> R,
    {
        let (header, data, first_row) = match self.strategy {
            BindStrategy::Positional => (None, rows, 1),
            BindStrategy::ByName => match rows {
                [header, data @ ..] if !data.is_empty() => (Some(header), data, 2),
                _ => return Err(Error::EmptyInput { rows: rows.len() }),
            },
        };

        let mut stats = BindStats::new();
        stats.rows_read = data.len();
        let mut plan: Option<ColumnPlan> = None;

        for (offset, row) in data.iter().enumerate() {
            let line = first_row + offset;
            let mut record = make();

            let column_plan =
                plan.get_or_insert_with(|| Self::plan_for(header, record.descriptors()));
            if offset == 0 {
                let (columns, bound, assignments) = column_plan.stats();
                debug!(
                    "Column plan ({}): {} columns, {} bound, {} field assignments",
                    self.strategy, columns, bound, assignments
                );
            }

            if header.is_some() && row.len() < column_plan.width() {
                return Err(Error::RowTooShort {
                    row: line,
                    expected: column_plan.width(),
                    found: row.len(),
                });
            }

            for (column, token) in row.iter().enumerate().take(column_plan.width()) {
                for &index in column_plan.targets(column) {
                    match self.coercer.coerce_into(&mut record, index, token, line)? {
                        FieldOutcome::Written => stats.fields_written += 1,
                        FieldOutcome::Skipped => stats.fields_skipped += 1,
                    }
                }
            }

            out.push(E::from(record));
            stats.records_bound += 1;
        }

        if let Some(plan) = plan {
            if !plan.unmatched_columns().is_empty() {
                debug!(
                    "Header columns with no matching field: {:?}",
                    plan.unmatched_columns()
                );
            }
            stats.unmatched_columns = plan.unmatched_columns().to_vec();
        }

        debug!(
            "Bound {} records from {} rows ({} fields written, {} skipped)",
            stats.records_bound, stats.rows_read, stats.fields_written, stats.fields_skipped
        );

        Ok(stats)
    }

    fn plan_for(header: Option<&StringRecord>, descriptors: &[FieldDescriptor]) -> ColumnPlan {
        match header {
            Some(header) => ColumnPlan::by_name(header.iter(), descriptors),
            None => ColumnPlan::positional(descriptors),
        }
    }
}
