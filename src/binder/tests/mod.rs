//! Test records and helpers shared by the binder test modules

use csv::StringRecord;

mod coercer_tests;

crate::csv_record! {
    /// Bound by name and positionally
    #[derive(Debug, Clone, PartialEq)]
    pub struct Person {
        pub name: String => "name",
        pub age: i32 => "age",
    }
}

crate::csv_record! {
    /// Mixed participation for positional tests
    #[derive(Debug, Clone, PartialEq)]
    pub struct Reading {
        pub station: String => "station",
        pub internal: String => skip,
        pub count: i64 => "count",
        pub valid: bool => "valid",
        pub temp: f32 => "temp",
        pub rain: f64 => "rain",
    }
}

crate::csv_record! {
    /// Two fields bound to the same header name
    #[derive(Debug, Clone, PartialEq)]
    pub struct Mirrored {
        pub first: String => "id",
        pub second: String => "id",
        pub other: i32 => "other",
    }
}

/// Build tokenized rows from string slices
pub fn rows(data: &[&[&str]]) -> Vec<StringRecord> {
    data.iter().map(|row| StringRecord::from(row.to_vec())).collect()
}
