//! Numeric bound validators
//!
//! Thresholds are `f64`. Integer inputs are compared exactly, without
//! widening, and are reported in their integer form.
//! Non-numeric input fails with `NaN` instead of passing silently.

use std::cmp::Ordering;

use crate::foundation::{Number, ValidationError};

/// Key reported by [`GreaterThan`].
pub const GREATER_THAN: &str = "greaterThan";
/// Key reported by [`LowerThan`].
pub const LOWER_THAN: &str = "lowerThan";

crate::validator! {
    /// Validates that a number is strictly greater than a threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck_validator::foundation::{Validate, Value};
    /// use fieldcheck_validator::validators::greater_than;
    ///
    /// let validator = greater_than(5.0);
    /// assert!(validator.validate(&Value::from(6)).is_ok());
    /// assert!(validator.validate(&Value::from(5)).is_err()); // Not strictly greater
    /// ```
    #[derive(Copy, PartialEq)]
    pub GreaterThan { bound: f64 } for Number;
    rule(self, input) { input.compare(self.bound) == Some(Ordering::Greater) }
    error(self, input) {
        ValidationError::new(GREATER_THAN)
            .with_param(input)
            .with_param(self.bound)
    }
    fn greater_than(bound: f64);
}

crate::validator! {
    /// Validates that a number is strictly lower than a threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck_validator::foundation::{Validate, Value};
    /// use fieldcheck_validator::validators::lower_than;
    ///
    /// let validator = lower_than(10.0);
    /// assert!(validator.validate(&Value::from(9.5)).is_ok());
    /// assert!(validator.validate(&Value::from(10)).is_err()); // Not strictly lower
    /// ```
    #[derive(Copy, PartialEq)]
    pub LowerThan { bound: f64 } for Number;
    rule(self, input) { input.compare(self.bound) == Some(Ordering::Less) }
    error(self, input) {
        ValidationError::new(LOWER_THAN)
            .with_param(input)
            .with_param(self.bound)
    }
    fn lower_than(bound: f64);
}

// ============================================================================
// TESTS
// ============================================================================
