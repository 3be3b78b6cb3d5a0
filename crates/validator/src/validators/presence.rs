//! Presence validator
//!
//! [`NonEmpty`] accepts any shape and rejects the zero value of that shape.

use crate::foundation::{ValidationError, Value};

/// Key reported by [`NonEmpty`].
pub const NON_ZERO: &str = "nonZero";

crate::validator! {
    /// Validates that a value is not the zero value of its shape.
    ///
    /// Empty text, sequences and mappings, `0`, `0.0`, `false`, `Null`,
    /// the timestamp `0001-01-01T00:00:00Z` and records whose fields are
    /// all zero fail. The Unix epoch is a regular timestamp and passes.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck_validator::foundation::{Validate, Value};
    /// use fieldcheck_validator::validators::non_empty;
    ///
    /// assert!(non_empty().validate(&Value::from("foo")).is_ok());
    /// assert!(non_empty().validate(&Value::from("")).is_err());
    /// assert!(non_empty().validate(&Value::from(0)).is_err());
    /// ```
    pub NonEmpty for Value;
    rule(input) { !input.is_zero() }
    error(input) { ValidationError::new(NON_ZERO) }
    fn non_empty();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Record, Validate};
    use chrono::{DateTime, TimeZone, Utc};
    use rstest::rstest;

    fn flagged(flag: bool) -> Value {
        Value::from(Record::new().with_field("b", flag))
    }

    #[rstest]
    #[case::int(Value::from(1))]
    #[case::float(Value::from(1.0))]
    #[case::text(Value::from("foo"))]
    #[case::bool(Value::from(true))]
    #[case::record(flagged(true))]
    #[case::sequence_of_records(Value::Sequence(vec![flagged(true)]))]
    #[case::epoch(Value::from(DateTime::<Utc>::default()))]
    fn accepts_non_zero(#[case] value: Value) {
        assert!(non_empty().validate(&value).is_ok());
    }

    #[rstest]
    #[case::int(Value::from(0))]
    #[case::float(Value::from(0.0))]
    #[case::text(Value::from(""))]
    #[case::bool(Value::from(false))]
    #[case::record(flagged(false))]
    #[case::sequence(Value::Sequence(Vec::new()))]
    #[case::null(Value::Null)]
    #[case::zero_time(Value::from(Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap()))]
    fn rejects_zero(#[case] value: Value) {
        let err = non_empty().validate(&value).unwrap_err();
        assert_eq!(err.entries()[0].key(), NON_ZERO);
        assert!(err.entries()[0].params().is_empty());
    }
}
