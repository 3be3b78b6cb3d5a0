//! String content validators
//!
//! Validators for checking string shape: email addresses, UUIDs and
//! arbitrary regular expressions.

use std::sync::LazyLock;

use crate::foundation::{SchemaError, ValidationError};

/// Key reported by [`Email`].
pub const EMAIL: &str = "email";
/// Key reported by [`MatchesRegex`].
pub const REGEX: &str = "regex";
/// Key reported by [`Uuid`].
pub const UUID: &str = "uuid";

static UUID_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-5][0-9a-fA-F]{3}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .unwrap()
});

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// The pattern is compiled once, at construction. An invalid pattern is
    /// a [`SchemaError::InvalidPattern`], not a validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck_validator::foundation::{Validate, Value};
    /// use fieldcheck_validator::validators::matches_regex;
    ///
    /// let validator = matches_regex("^[a-zA-Z0-9]+$").unwrap();
    /// assert!(validator.validate(&Value::from("aA0")).is_ok());
    /// assert!(validator.validate(&Value::from("not-valid*")).is_err());
    /// assert!(matches_regex("(unclosed").is_err());
    /// ```
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::new(REGEX)
            .with_param(input)
            .with_param(self.pattern.as_str())
    }
    new(pattern: &str) -> SchemaError {
        regex::Regex::new(pattern)
            .map(|pattern| Self { pattern })
            .map_err(|e| SchemaError::invalid_pattern(pattern, &e))
    }
    fn matches_regex(pattern: &str) -> SchemaError;
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

/// Shallow email shape check.
///
/// Exactly one `@`, neither first nor last; the domain part holds a `.`
/// and does not start with one; the address does not end with `.`.
fn is_email(input: &str) -> bool {
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !input.ends_with('.')
}

crate::validator! {
    /// Validates email shape.
    ///
    /// This is a structural check, not RFC 5322 parsing.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck_validator::foundation::{Validate, Value};
    /// use fieldcheck_validator::validators::email;
    ///
    /// assert!(email().validate(&Value::from("foo@bar.com")).is_ok());
    /// assert!(email().validate(&Value::from("foo@bar.")).is_err());
    /// ```
    pub Email for str;
    rule(input) { is_email(input) }
    error(input) { ValidationError::new(EMAIL).with_param(input) }
    fn email();
}

// ============================================================================
// UUID VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates the canonical hyphenated UUID form, versions 1 to 5.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck_validator::foundation::{Validate, Value};
    /// use fieldcheck_validator::validators::uuid;
    ///
    /// let id = Value::from("e3ef5847-2e83-4c67-be80-4e1c832afc4a");
    /// assert!(uuid().validate(&id).is_ok());
    /// assert!(uuid().validate(&Value::from("invalid-uuid")).is_err());
    /// ```
    pub Uuid for str;
    rule(input) { UUID_REGEX.is_match(input) }
    error(input) { ValidationError::new(UUID).with_param(input) }
    fn uuid();
}

// ============================================================================
// TESTS
// ============================================================================
