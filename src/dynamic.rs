//! Runtime-declared record shapes.
//!
//! A [`DynamicSchema`] is built from `name:kind` column specs, for example
//! from command-line arguments. Kind names the coercer does not know are kept
//! as [`DeclaredKind::Unsupported`] so the bind reports them instead of the
//! schema silently dropping the column.

use crate::constants::{COLUMN_SPEC_SEPARATOR, READ_ONLY_SUFFIX};
use crate::record::{DeclaredKind, FieldDescriptor, FieldWriteError, Record, Value};
use crate::{Error, Result};
use std::str::FromStr;
use std::sync::Arc;

/// One declared column: `name:kind`, with a trailing `!` for read-only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: DeclaredKind,
    pub writable: bool,
}

impl FromStr for ColumnSpec {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Self> {
        let (name, kind) = spec.split_once(COLUMN_SPEC_SEPARATOR).ok_or_else(|| {
            Error::configuration(format!(
                "invalid column spec '{}': expected name{}kind",
                spec, COLUMN_SPEC_SEPARATOR
            ))
        })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(Error::configuration(format!(
                "invalid column spec '{}': empty column name",
                spec
            )));
        }

        let kind = kind.trim();
        let (kind, writable) = match kind.strip_suffix(READ_ONLY_SUFFIX) {
            Some(stripped) => (stripped, false),
            None => (kind, true),
        };
        if kind.is_empty() {
            return Err(Error::configuration(format!(
                "invalid column spec '{}': empty kind",
                spec
            )));
        }

        Ok(ColumnSpec {
            name: name.to_string(),
            kind: DeclaredKind::parse(kind),
            writable,
        })
    }
}

/// Ordered field descriptors for a runtime-declared record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicSchema {
    descriptors: Vec<FieldDescriptor>,
}

impl DynamicSchema {
    /// Build a schema where every column participates positionally and binds
    /// to a header of the same name
    pub fn new(columns: impl IntoIterator<Item = ColumnSpec>) -> Self {
        let descriptors = columns
            .into_iter()
            .map(|spec| {
                let descriptor =
                    FieldDescriptor::new(spec.name.clone(), spec.kind).bound_to(spec.name);
                if spec.writable {
                    descriptor
                } else {
                    descriptor.read_only()
                }
            })
            .collect();

        Self { descriptors }
    }

    /// Parse a list of `name:kind` specs
    pub fn parse<S: AsRef<str>>(specs: &[S]) -> Result<Self> {
        let columns = specs
            .iter()
            .map(|s| s.as_ref().parse::<ColumnSpec>())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(columns))
    }

    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Index of the first field named `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.descriptors.iter().position(|d| d.field == name)
    }

    /// Fresh zero-valued record for this schema
    pub fn new_record(self: &Arc<Self>) -> DynamicRecord {
        DynamicRecord::new(Arc::clone(self))
    }
}

/// A record whose shape is a shared [`DynamicSchema`]
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicRecord {
    schema: Arc<DynamicSchema>,
    values: Vec<Option<Value>>,
}

impl DynamicRecord {
    /// Scalar fields start at their zero value; unsupported fields start unset.
    pub fn new(schema: Arc<DynamicSchema>) -> Self {
        let values = schema
            .descriptors
            .iter()
            .map(|d| d.kind.scalar().map(|k| k.zero_value()))
            .collect();
        Self { schema, values }
    }

    pub fn schema(&self) -> &Arc<DynamicSchema> {
        &self.schema
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schema
            .position(name)
            .and_then(|index| self.values[index].as_ref())
    }

    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.values.get(index).and_then(Option::as_ref)
    }

    /// Field names paired with their current values
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.schema
            .descriptors
            .iter()
            .zip(&self.values)
            .map(|(d, v)| (d.field.as_ref(), v.as_ref()))
    }
}

impl Record for DynamicRecord {
    fn descriptors(&self) -> &[FieldDescriptor] {
        &self.schema.descriptors
    }

    fn set_field(
        &mut self,
        index: usize,
        value: Value,
    ) -> std::result::Result<(), FieldWriteError> {
        let descriptor = self
            .schema
            .descriptors
            .get(index)
            .ok_or(FieldWriteError::OutOfRange { index })?;

        if !descriptor.writable {
            return Err(FieldWriteError::ReadOnly);
        }

        if let Some(expected) = descriptor.kind.scalar() {
            if expected != value.kind() {
                return Err(FieldWriteError::KindMismatch {
                    expected,
                    actual: value.kind(),
                });
            }
        }

        self.values[index] = Some(value);
        Ok(())
    }
}
