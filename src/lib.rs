//! rowbind
//!
//! Reads delimited-text (CSV) input and binds each row into a typed record,
//! appending the records to a caller-owned collection.
//!
//! This library provides:
//! - Positional binding: tokens fill participating fields in declaration order
//! - Name-based binding: the first row is a header matched against bound field names
//! - Strict coercion into text, boolean, 32/64-bit integer and 32/64-bit float fields
//! - Compile-time record declarations via [`csv_record!`]
//! - Runtime record shapes via [`DynamicSchema`]
//!
//! ## Usage
//!
//! ```
//! use rowbind::CsvReader;
//!
//! rowbind::csv_record! {
//!     #[derive(Debug, PartialEq)]
//!     pub struct Person {
//!         pub name: String => "name",
//!         pub age: i32 => "age",
//!     }
//! }
//!
//! let input = "name,age\nAda,36\n";
//! let mut people: Vec<Person> = Vec::new();
//! CsvReader::new().bind_named::<Person, _>(input.as_bytes(), &mut people)?;
//!
//! assert_eq!(people, vec![Person { name: "Ada".into(), age: 36 }]);
//! # Ok::<(), rowbind::Error>(())
//! ```
//!
//! Collect into `Vec<Box<Person>>` instead to store heap-owned records.

pub mod binder;
pub mod config;
pub mod constants;
pub mod dynamic;
pub mod error;
mod macros;
pub mod reader;
pub mod record;
pub mod tokenizer;

pub mod cli;

// Re-export commonly used types
pub use binder::{BindStats, BindStrategy, RowBinder};
pub use config::{ReaderConfig, TrimMode, UnsupportedKindPolicy};
pub use dynamic::{ColumnSpec, DynamicRecord, DynamicSchema};
pub use error::{Error, Result};
pub use reader::CsvReader;
pub use record::{
    DeclaredKind, FieldDescriptor, FieldKind, FieldWriteError, Record, ScalarField, Value,
};
