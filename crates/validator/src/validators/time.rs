//! Date ordering validators
//!
//! Both comparisons are strict: a value equal to the boundary fails.

use chrono::{DateTime, Utc};

use crate::foundation::ValidationError;

/// Key reported by [`Before`].
pub const BEFORE: &str = "before";
/// Key reported by [`After`].
pub const AFTER: &str = "after";

crate::validator! {
    /// Validates that a timestamp is strictly earlier than `bound`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use fieldcheck_validator::foundation::{Validate, Value};
    /// use fieldcheck_validator::validators::before;
    ///
    /// let cutoff = Utc.with_ymd_and_hms(2014, 1, 1, 1, 0, 0).unwrap();
    /// let earlier = Utc.with_ymd_and_hms(2013, 1, 1, 1, 0, 0).unwrap();
    /// assert!(before(cutoff).validate(&Value::from(earlier)).is_ok());
    /// assert!(before(cutoff).validate(&Value::from(cutoff)).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Before { bound: DateTime<Utc> } for DateTime<Utc>;
    rule(self, input) { *input < self.bound }
    error(self, input) {
        ValidationError::new(BEFORE)
            .with_param(input)
            .with_param(self.bound)
    }
    fn before(bound: DateTime<Utc>);
}

crate::validator! {
    /// Validates that a timestamp is strictly later than `bound`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub After { bound: DateTime<Utc> } for DateTime<Utc>;
    rule(self, input) { *input > self.bound }
    error(self, input) {
        ValidationError::new(AFTER)
            .with_param(input)
            .with_param(self.bound)
    }
    fn after(bound: DateTime<Utc>);
}

// ============================================================================
// TESTS
// ============================================================================
