//! Field coercion: text token to native scalar, then into the record.
//!
//! Parsing is strict. Tokens are not trimmed here (trimming is a tokenizer
//! setting) and numbers are parsed as plain base-10 / decimal text with no
//! locale handling.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;
use tracing::{trace, warn};

use crate::config::UnsupportedKindPolicy;
use crate::constants::{FALSE_LITERALS, TRUE_LITERALS};
use crate::record::{DeclaredKind, FieldKind, FieldWriteError, Record, Value};
use crate::{Error, Result};

/// Why a token failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionFailure {
    #[error("not a boolean literal")]
    InvalidBoolean,

    #[error(transparent)]
    InvalidInteger(#[from] ParseIntError),

    #[error(transparent)]
    InvalidFloat(#[from] ParseFloatError),

    #[error("number out of range for the target float width")]
    FloatOutOfRange,
}

/// Outcome of a single field write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    Written,
    /// Unsupported kind left unset under [`UnsupportedKindPolicy::Skip`]
    Skipped,
}

/// Parse a boolean using the canonical literal set (`1`, `t`, `true`, ...)
pub fn parse_bool(token: &str) -> Option<bool> {
    if TRUE_LITERALS.contains(&token) {
        Some(true)
    } else if FALSE_LITERALS.contains(&token) {
        Some(false)
    } else {
        None
    }
}

/// Convert a token to the native value of `kind`
pub fn coerce(token: &str, kind: FieldKind) -> std::result::Result<Value, CoercionFailure> {
    let value = match kind {
        FieldKind::Text => Value::Text(token.to_string()),
        FieldKind::Boolean => {
            Value::Boolean(parse_bool(token).ok_or(CoercionFailure::InvalidBoolean)?)
        }
        FieldKind::Integer => Value::Integer(token.parse::<i32>()?),
        FieldKind::Int64 => Value::Int64(token.parse::<i64>()?),
        FieldKind::Float32 => {
            let parsed = token.parse::<f32>()?;
            check_float_range(token, parsed.is_infinite())?;
            Value::Float32(parsed)
        }
        FieldKind::Float64 => {
            let parsed = token.parse::<f64>()?;
            check_float_range(token, parsed.is_infinite())?;
            Value::Float64(parsed)
        }
    };
    Ok(value)
}

/// An infinite parse result is only valid when the token spells infinity
fn check_float_range(token: &str, infinite: bool) -> std::result::Result<(), CoercionFailure> {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    let literal =
        unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity");
    if infinite && !literal {
        Err(CoercionFailure::FloatOutOfRange)
    } else {
        Ok(())
    }
}

/// Writes tokens into record fields according to their descriptors
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldCoercer {
    unsupported: UnsupportedKindPolicy,
}

impl FieldCoercer {
    pub fn new(unsupported: UnsupportedKindPolicy) -> Self {
        Self { unsupported }
    }

    /// Coerce `token` and store it in field `index` of `record`.
    ///
    /// Writability is checked before any conversion. `row` is the 1-based
    /// input row, used for error context only.
    pub fn coerce_into<R: Record + ?Sized>(
        &self,
        record: &mut R,
        index: usize,
        token: &str,
        row: usize,
    ) -> Result<FieldOutcome> {
        let value = {
            let descriptor = record.descriptors().get(index).ok_or_else(|| {
                Error::unwritable_field(
                    format!("#{index}"),
                    FieldWriteError::OutOfRange { index },
                )
            })?;

            if !descriptor.writable {
                return Err(Error::unwritable_field(
                    &*descriptor.field,
                    FieldWriteError::ReadOnly,
                ));
            }

            match &descriptor.kind {
                DeclaredKind::Scalar(kind) => {
                    let value = coerce(token, *kind).map_err(|source| {
                        Error::coercion(*kind, token, &*descriptor.field, row, source)
                    })?;
                    trace!(field = %descriptor.field, row, %value, "field written");
                    value
                }
                DeclaredKind::Unsupported(name) => match self.unsupported {
                    UnsupportedKindPolicy::Reject => {
                        return Err(Error::unsupported_kind(
                            &**name,
                            &*descriptor.field,
                        ));
                    }
                    UnsupportedKindPolicy::Skip => {
                        warn!(
                            "Skipping field '{}' at row {}: unsupported kind '{}'",
                            descriptor.field, row, name
                        );
                        return Ok(FieldOutcome::Skipped);
                    }
                },
            }
        };

        record.set_field(index, value).map_err(|reason| {
            let field = record.descriptors()[index].field.to_string();
            Error::unwritable_field(field, reason)
        })?;

        Ok(FieldOutcome::Written)
    }
}
