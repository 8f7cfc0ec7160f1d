//! Binding statistics returned from every bind call

use serde::{Deserialize, Serialize};

/// Counters for one bind call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindStats {
    /// Data rows handed to the binder (header excluded)
    pub rows_read: usize,

    /// Records appended to the output collection
    pub records_bound: usize,

    /// Field writes that succeeded
    pub fields_written: usize,

    /// Fields left unset because their kind is unsupported
    pub fields_skipped: usize,

    /// Header names that matched no field
    pub unmatched_columns: Vec<String>,
}

impl BindStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Average field writes per bound record
    pub fn fields_per_record(&self) -> f64 {
        if self.records_bound == 0 {
            0.0
        } else {
            self.fields_written as f64 / self.records_bound as f64
        }
    }

    /// True when every row produced a record and nothing was skipped
    pub fn is_complete(&self) -> bool {
        self.rows_read == self.records_bound && self.fields_skipped == 0
    }
}
