//! Tests for token coercion and field writes

use std::sync::Arc;

use super::*;
use crate::binder::coercer::{CoercionFailure, FieldCoercer, FieldOutcome, coerce, parse_bool};
use crate::config::UnsupportedKindPolicy;
use crate::dynamic::DynamicSchema;
use crate::record::{FieldKind, FieldWriteError, Value};
use crate::Error;

#[test]
fn test_text_stored_verbatim() {
    assert_eq!(
        coerce("  spaced ", FieldKind::Text),
        Ok(Value::Text("  spaced ".to_string()))
    );
    assert_eq!(coerce("", FieldKind::Text), Ok(Value::Text(String::new())));
}

#[test]
fn test_boolean_literals() {
    for token in ["1", "t", "T", "true", "TRUE", "True"] {
        assert_eq!(parse_bool(token), Some(true), "token {token}");
    }
    for token in ["0", "f", "F", "false", "FALSE", "False"] {
        assert_eq!(parse_bool(token), Some(false), "token {token}");
    }
    for token in ["yes", "tRuE", " true", ""] {
        assert_eq!(parse_bool(token), None, "token {token:?}");
    }

    assert_eq!(coerce("true", FieldKind::Boolean), Ok(Value::Boolean(true)));
    assert_eq!(
        coerce("maybe", FieldKind::Boolean),
        Err(CoercionFailure::InvalidBoolean)
    );
}

#[test]
fn test_integer_parsing() {
    assert_eq!(coerce("42", FieldKind::Integer), Ok(Value::Integer(42)));
    assert_eq!(coerce("-7", FieldKind::Integer), Ok(Value::Integer(-7)));
    assert_eq!(coerce("+7", FieldKind::Integer), Ok(Value::Integer(7)));
    assert!(matches!(
        coerce("abc", FieldKind::Integer),
        Err(CoercionFailure::InvalidInteger(_))
    ));
    assert!(coerce("1.5", FieldKind::Integer).is_err());
    assert!(coerce("", FieldKind::Integer).is_err());
}

#[test]
fn test_integer_range_depends_on_width() {
    assert!(coerce("3000000000", FieldKind::Integer).is_err());
    assert_eq!(
        coerce("3000000000", FieldKind::Int64),
        Ok(Value::Int64(3_000_000_000))
    );
    assert!(coerce("9223372036854775808", FieldKind::Int64).is_err());
}

#[test]
#[allow(clippy::approx_constant)]
fn test_float_parsing() {
    match coerce("3.14", FieldKind::Float64) {
        Ok(Value::Float64(x)) => assert!((x - 3.14).abs() < f64::EPSILON),
        other => panic!("unexpected {other:?}"),
    }
    match coerce("2.5e-3", FieldKind::Float32) {
        Ok(Value::Float32(x)) => assert!((x - 0.0025).abs() < f32::EPSILON),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(coerce("7", FieldKind::Float64), Ok(Value::Float64(7.0)));
    assert!(matches!(
        coerce("1,5", FieldKind::Float64),
        Err(CoercionFailure::InvalidFloat(_))
    ));
}

#[test]
fn test_float_overflow_rejected() {
    assert_eq!(
        coerce("1e40", FieldKind::Float32),
        Err(CoercionFailure::FloatOutOfRange)
    );
    assert_eq!(
        coerce("-1e400", FieldKind::Float64),
        Err(CoercionFailure::FloatOutOfRange)
    );
    assert_eq!(coerce("1e40", FieldKind::Float64), Ok(Value::Float64(1e40)));
}

#[test]
fn test_float_infinity_literals_accepted() {
    assert_eq!(
        coerce("inf", FieldKind::Float32),
        Ok(Value::Float32(f32::INFINITY))
    );
    assert_eq!(
        coerce("-Infinity", FieldKind::Float64),
        Ok(Value::Float64(f64::NEG_INFINITY))
    );
    assert!(matches!(
        coerce("NaN", FieldKind::Float64),
        Ok(Value::Float64(x)) if x.is_nan()
    ));
}

#[test]
fn test_coerce_into_static_record() {
    let coercer = FieldCoercer::default();
    let mut person = Person::default();

    assert_eq!(
        coercer.coerce_into(&mut person, 1, "36", 1).unwrap(),
        FieldOutcome::Written
    );
    assert_eq!(person.age, 36);
    assert_eq!(person.name, "");
}

#[test]
fn test_coercion_error_carries_context() {
    let coercer = FieldCoercer::default();
    let mut person = Person::default();

    let err = coercer.coerce_into(&mut person, 1, "abc", 4).unwrap_err();
    match &err {
        Error::Coercion {
            kind,
            token,
            field,
            row,
            ..
        } => {
            assert_eq!(*kind, FieldKind::Integer);
            assert_eq!(token, "abc");
            assert_eq!(field, "age");
            assert_eq!(*row, 4);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(err.to_string().contains("integer"));
    assert_eq!(person, Person::default());
}

#[test]
fn test_read_only_field_rejected_before_conversion() {
    let schema = Arc::new(DynamicSchema::parse(&["id:int!"]).unwrap());
    let mut record = schema.new_record();

    // An unparseable token still reports the write failure, not a coercion failure
    let err = FieldCoercer::default()
        .coerce_into(&mut record, 0, "not-a-number", 1)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::UnwritableField {
            reason: FieldWriteError::ReadOnly,
            ..
        }
    ));
}

#[test]
fn test_out_of_range_index_is_unwritable() {
    let mut person = Person::default();
    let err = FieldCoercer::default()
        .coerce_into(&mut person, 9, "x", 1)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::UnwritableField {
            reason: FieldWriteError::OutOfRange { index: 9 },
            ..
        }
    ));
}

#[test]
fn test_unsupported_kind_rejected_by_default() {
    let schema = Arc::new(DynamicSchema::parse(&["born:date"]).unwrap());
    let mut record = schema.new_record();

    let err = FieldCoercer::default()
        .coerce_into(&mut record, 0, "1815-12-10", 2)
        .unwrap_err();

    match err {
        Error::UnsupportedKind { kind, field } => {
            assert_eq!(kind, "date");
            assert_eq!(field, "born");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_unsupported_kind_skipped_when_lenient() {
    let schema = Arc::new(DynamicSchema::parse(&["born:date"]).unwrap());
    let mut record = schema.new_record();

    let outcome = FieldCoercer::new(UnsupportedKindPolicy::Skip)
        .coerce_into(&mut record, 0, "1815-12-10", 2)
        .unwrap();

    assert_eq!(outcome, FieldOutcome::Skipped);
    assert_eq!(record.get("born"), None);
}
