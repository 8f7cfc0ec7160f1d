//! Error handling for CSV binding operations.
//!
//! Every failure is returned to the caller of the bind operation. Nothing is
//! retried or swallowed internally, and records appended before the failing
//! row stay in the output collection.

use crate::binder::coercer::CoercionFailure;
use crate::record::{FieldKind, FieldWriteError};
use thiserror::Error;

/// Result type alias for binding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for reading, tokenizing and binding CSV input
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying stream or file could not be read
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Row tokenizer rejected the input (bad quoting, uneven rows, invalid UTF-8)
    #[error("CSV tokenizer error: {source}")]
    Tokenize {
        #[source]
        source: csv::Error,
    },

    /// Name-based binding needs a header row plus at least one data row
    #[error(
        "No data rows: name-based binding needs a header and at least one row, got {rows} row(s)"
    )]
    EmptyInput { rows: usize },

    /// A data row has fewer tokens than the header has columns
    #[error("Row {row} has {found} column(s) but the header declares {expected}")]
    RowTooShort {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A token could not be converted to the field's declared kind
    #[error(
        "Cannot coerce '{token}' to {} for field '{field}' at row {row}",
        .kind.category()
    )]
    Coercion {
        kind: FieldKind,
        token: String,
        field: String,
        row: usize,
        #[source]
        source: CoercionFailure,
    },

    /// A field declares a kind the coercer does not handle
    #[error(
        "Unsupported kind '{kind}' on field '{field}': only primitive scalar kinds are supported"
    )]
    UnsupportedKind { kind: String, field: String },

    /// The target field exists but cannot be assigned
    #[error("Field '{field}' cannot be written: {reason}")]
    UnwritableField {
        field: String,
        #[source]
        reason: FieldWriteError,
    },

    /// Reader configuration or schema declaration is invalid
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a coercion error for a single field
    pub fn coercion(
        kind: FieldKind,
        token: impl Into<String>,
        field: impl Into<String>,
        row: usize,
        source: CoercionFailure,
    ) -> Self {
        Self::Coercion {
            kind,
            token: token.into(),
            field: field.into(),
            row,
            source,
        }
    }

    /// Create an unsupported kind error
    pub fn unsupported_kind(kind: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnsupportedKind {
            kind: kind.into(),
            field: field.into(),
        }
    }

    /// Create an unwritable field error
    pub fn unwritable_field(field: impl Into<String>, reason: FieldWriteError) -> Self {
        Self::UnwritableField {
            field: field.into(),
            reason,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for failures of the underlying stream rather than of the content
    pub fn is_io(&self) -> bool {
        match self {
            Self::Io { .. } => true,
            Self::Tokenize { source } => source.is_io_error(),
            _ => false,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Tokenize { source: error }
    }
}
