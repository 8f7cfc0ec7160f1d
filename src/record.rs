//! Record model: field kinds, descriptors and the [`Record`] trait.
//!
//! A record type exposes an ordered list of [`FieldDescriptor`]s and a
//! setter that accepts an already-coerced [`Value`]. Compile-time records are
//! generated with [`crate::csv_record!`]; runtime shapes live in
//! [`crate::dynamic`].

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Primitive scalar kinds a field can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Boolean,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Int64,
    Float32,
    Float64,
}

impl FieldKind {
    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Boolean => "boolean",
            FieldKind::Integer => "integer",
            FieldKind::Int64 => "int64",
            FieldKind::Float32 => "float32",
            FieldKind::Float64 => "float64",
        }
    }

    /// Coarse category used in coercion error messages
    pub fn category(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Boolean => "boolean",
            FieldKind::Integer | FieldKind::Int64 => "integer",
            FieldKind::Float32 | FieldKind::Float64 => "float",
        }
    }

    /// Resolve a kind name or one of its aliases
    pub fn from_name(name: &str) -> Option<FieldKind> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" | "string" | "str" => Some(FieldKind::Text),
            "boolean" | "bool" => Some(FieldKind::Boolean),
            "integer" | "int" | "i32" => Some(FieldKind::Integer),
            "int64" | "i64" | "long" => Some(FieldKind::Int64),
            "float32" | "f32" => Some(FieldKind::Float32),
            "float64" | "f64" | "float" | "double" => Some(FieldKind::Float64),
            _ => None,
        }
    }

    /// Value a fresh record holds before any token is written
    pub fn zero_value(self) -> Value {
        match self {
            FieldKind::Text => Value::Text(String::new()),
            FieldKind::Boolean => Value::Boolean(false),
            FieldKind::Integer => Value::Integer(0),
            FieldKind::Int64 => Value::Int64(0),
            FieldKind::Float32 => Value::Float32(0.0),
            FieldKind::Float64 => Value::Float64(0.0),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind as declared by the record type, which may name something unsupported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredKind {
    Scalar(FieldKind),
    Unsupported(Cow<'static, str>),
}

impl DeclaredKind {
    pub fn parse(name: &str) -> DeclaredKind {
        match FieldKind::from_name(name) {
            Some(kind) => DeclaredKind::Scalar(kind),
            None => DeclaredKind::Unsupported(Cow::Owned(name.trim().to_string())),
        }
    }

    pub fn scalar(&self) -> Option<FieldKind> {
        match self {
            DeclaredKind::Scalar(kind) => Some(*kind),
            DeclaredKind::Unsupported(_) => None,
        }
    }
}

impl fmt::Display for DeclaredKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredKind::Scalar(kind) => write!(f, "{kind}"),
            DeclaredKind::Unsupported(name) => write!(f, "{name} (unsupported)"),
        }
    }
}

/// Native scalar produced by coercing one token
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Boolean(bool),
    Integer(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
}

impl Value {
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::Text(_) => FieldKind::Text,
            Value::Boolean(_) => FieldKind::Boolean,
            Value::Integer(_) => FieldKind::Integer,
            Value::Int64(_) => FieldKind::Int64,
            Value::Float32(_) => FieldKind::Float32,
            Value::Float64(_) => FieldKind::Float64,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Int64(i) => write!(f, "{i}"),
            Value::Float32(x) => write!(f, "{x}"),
            Value::Float64(x) => write!(f, "{x}"),
        }
    }
}

/// Per-field metadata supplied by the record type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field identifier, used in error messages
    pub field: Cow<'static, str>,

    /// Header name this field binds to in name-based mode
    pub column: Option<Cow<'static, str>>,

    /// Whether positional binding assigns a token to this field
    pub participates: bool,

    /// Declared kind
    pub kind: DeclaredKind,

    /// Whether the field accepts writes
    pub writable: bool,
}

impl FieldDescriptor {
    /// A writable field that participates positionally and has no bound name
    pub fn new(field: impl Into<Cow<'static, str>>, kind: DeclaredKind) -> Self {
        Self {
            field: field.into(),
            column: None,
            participates: true,
            kind,
            writable: true,
        }
    }

    pub fn bound_to(mut self, column: impl Into<Cow<'static, str>>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn skipped(mut self) -> Self {
        self.participates = false;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    /// True when this field's bound name equals the header name
    pub fn binds_to(&self, header: &str) -> bool {
        self.column.as_deref() == Some(header)
    }
}

/// Why a record refused a write
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldWriteError {
    #[error("no field at index {index}")]
    OutOfRange { index: usize },

    #[error("field is read-only")]
    ReadOnly,

    #[error("expected a {expected} value, got {actual}")]
    KindMismatch {
        expected: FieldKind,
        actual: FieldKind,
    },
}

/// A record shape the binder can populate field by field
pub trait Record {
    /// Ordered field descriptors. Must be identical for every instance of a type.
    fn descriptors(&self) -> &[FieldDescriptor];

    /// Store a coerced value into the field at `index`
    fn set_field(&mut self, index: usize, value: Value) -> Result<(), FieldWriteError>;
}

/// Rust types usable as fields of a [`crate::csv_record!`] struct
pub trait ScalarField: Sized {
    const KIND: FieldKind;

    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! scalar_field {
    ($ty:ty, $kind:ident) => {
        impl ScalarField for $ty {
            const KIND: FieldKind = FieldKind::$kind;

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$kind(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

scalar_field!(String, Text);
scalar_field!(bool, Boolean);
scalar_field!(i32, Integer);
scalar_field!(i64, Int64);
scalar_field!(f32, Float32);
scalar_field!(f64, Float64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_aliases() {
        assert_eq!(FieldKind::from_name("string"), Some(FieldKind::Text));
        assert_eq!(FieldKind::from_name("BOOL"), Some(FieldKind::Boolean));
        assert_eq!(FieldKind::from_name("i32"), Some(FieldKind::Integer));
        assert_eq!(FieldKind::from_name("long"), Some(FieldKind::Int64));
        assert_eq!(FieldKind::from_name("f32"), Some(FieldKind::Float32));
        assert_eq!(FieldKind::from_name(" float "), Some(FieldKind::Float64));
        assert_eq!(FieldKind::from_name("date"), None);
    }

    #[test]
    fn test_declared_kind_keeps_unsupported_name() {
        assert_eq!(
            DeclaredKind::parse("int"),
            DeclaredKind::Scalar(FieldKind::Integer)
        );
        let declared = DeclaredKind::parse("timestamp");
        assert_eq!(declared.scalar(), None);
        assert_eq!(declared.to_string(), "timestamp (unsupported)");
    }

    #[test]
    fn test_categories_group_widths() {
        assert_eq!(FieldKind::Int64.category(), "integer");
        assert_eq!(FieldKind::Float32.category(), "float");
        assert_eq!(FieldKind::Boolean.category(), "boolean");
    }

    #[test]
    fn test_descriptor_binding() {
        let descriptor = FieldDescriptor::new("age", DeclaredKind::Scalar(FieldKind::Integer))
            .bound_to("age");

        assert!(descriptor.binds_to("age"));
        assert!(!descriptor.binds_to("Age"));
        assert!(descriptor.participates);
        assert!(descriptor.writable);

        let hidden = FieldDescriptor::new("note", DeclaredKind::Scalar(FieldKind::Text))
            .skipped()
            .read_only();
        assert!(!hidden.binds_to("note"));
        assert!(!hidden.participates);
        assert!(!hidden.writable);
    }

    #[test]
    fn test_scalar_field_conversion() {
        assert_eq!(i64::from_value(Value::Int64(7)), Some(7));
        assert_eq!(i64::from_value(Value::Integer(7)), None);
        assert_eq!(
            String::from_value(Value::Text("x".into())),
            Some("x".to_string())
        );
        assert_eq!(<f32 as ScalarField>::KIND, FieldKind::Float32);
    }

    #[test]
    fn test_zero_values_match_kind() {
        for kind in [
            FieldKind::Text,
            FieldKind::Boolean,
            FieldKind::Integer,
            FieldKind::Int64,
            FieldKind::Float32,
            FieldKind::Float64,
        ] {
            assert_eq!(kind.zero_value().kind(), kind);
        }
    }
}
