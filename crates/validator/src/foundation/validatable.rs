//! AsValidatable trait with GAT for shape extraction
//!
//! Validators are written against a concrete shape (`str`, `f64`, a
//! timestamp, a slice of values). `AsValidatable` pulls that shape out of a
//! [`Value`] or reports a named mismatch so a validator never has to guess
//! at the runtime type.

use std::borrow::Borrow;

use chrono::{DateTime, Utc};

use crate::foundation::{Number, ValidationError, Value};

/// Key reported when a numeric validator receives a non-numeric value.
pub const NOT_A_NUMBER: &str = "NaN";
/// Key reported when a text validator receives a non-text value.
pub const NOT_A_STRING: &str = "notString";
/// Key reported when a date validator receives a non-timestamp value.
pub const NOT_A_TIMESTAMP: &str = "notTimestamp";
/// Key reported when a sequence validator receives a non-sequence value.
pub const NOT_A_SLICE: &str = "notSlice";

// ============================================================================
// CORE TRAIT: AsValidatable with GAT
// ============================================================================

/// Trait for values that can be viewed as a `T` for validation.
///
/// Uses a GAT so the view can be either borrowed (`&str`) or copied
/// (`f64`), unified through the `Borrow` trait.
pub trait AsValidatable<T: ?Sized> {
    /// The view type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Extracts the view, or fails with a shape-mismatch error.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

// ============================================================================
// VALUE VIEWS
// ============================================================================

impl AsValidatable<Value> for Value {
    type Output<'a> = &'a Value;

    #[inline]
    fn as_validatable(&self) -> Result<&Value, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for Value {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        self.as_str()
            .ok_or_else(|| ValidationError::shape_mismatch(NOT_A_STRING, self))
    }
}

impl AsValidatable<f64> for Value {
    type Output<'a> = f64;

    #[inline]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        self.as_f64()
            .ok_or_else(|| ValidationError::shape_mismatch(NOT_A_NUMBER, self))
    }
}

impl AsValidatable<Number> for Value {
    type Output<'a> = Number;

    #[inline]
    fn as_validatable(&self) -> Result<Number, ValidationError> {
        self.as_number()
            .ok_or_else(|| ValidationError::shape_mismatch(NOT_A_NUMBER, self))
    }
}

impl AsValidatable<DateTime<Utc>> for Value {
    type Output<'a> = &'a DateTime<Utc>;

    #[inline]
    fn as_validatable(&self) -> Result<&DateTime<Utc>, ValidationError> {
        match self {
            Value::Timestamp(ts) => Ok(ts),
            other => Err(ValidationError::shape_mismatch(NOT_A_TIMESTAMP, other)),
        }
    }
}

impl AsValidatable<[Value]> for Value {
    type Output<'a> = &'a [Value];

    #[inline]
    fn as_validatable(&self) -> Result<&[Value], ValidationError> {
        match self {
            Value::Sequence(items) => Ok(items),
            other => Err(ValidationError::shape_mismatch(NOT_A_SLICE, other)),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &Value) -> Result<&str, ValidationError> {
        <Value as AsValidatable<str>>::as_validatable(value)
    }

    fn number(value: &Value) -> Result<f64, ValidationError> {
        <Value as AsValidatable<f64>>::as_validatable(value)
    }

    #[test]
    fn extracts_matching_shape() {
        assert_eq!(text(&Value::from("abc")).unwrap(), "abc");
        assert_eq!(number(&Value::from(4)).unwrap(), 4.0);
        assert_eq!(number(&Value::from(4.5)).unwrap(), 4.5);
    }

    #[test]
    fn mismatch_names_the_shape() {
        let err = number(&Value::from("abc")).unwrap_err();
        assert!(err.contains_key(NOT_A_NUMBER));
        assert_eq!(err.entries()[0].params(), ["text"]);

        let err = text(&Value::from(true)).unwrap_err();
        assert!(err.contains_key(NOT_A_STRING));
        assert_eq!(err.entries()[0].params(), ["bool"]);
    }

    #[test]
    fn sequence_view() {
        let seq = Value::from(vec![1, 2, 3]);
        let items = <Value as AsValidatable<[Value]>>::as_validatable(&seq).unwrap();
        assert_eq!(items.len(), 3);

        let err = <Value as AsValidatable<[Value]>>::as_validatable(&Value::Null).unwrap_err();
        assert!(err.contains_key(NOT_A_SLICE));
    }
}
