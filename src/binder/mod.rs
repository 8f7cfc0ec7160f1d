//! Binding engine: maps tokenized rows onto record fields
//!
//! ## Architecture
//!
//! - [`row_binder`] - per-row loop for both strategies, appends finished records
//! - [`column_plan`] - column to field index planning
//! - [`coercer`] - token to scalar conversion and field writes
//! - [`stats`] - counters returned from each bind

pub mod coercer;
pub mod column_plan;
pub mod row_binder;
pub mod stats;

#[cfg(test)]
mod tests;

pub use coercer::{CoercionFailure, FieldCoercer, FieldOutcome, coerce, parse_bool};
pub use column_plan::ColumnPlan;
pub use row_binder::{BindStrategy, RowBinder};
pub use stats::BindStats;
