//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Values**: `Value`, `ValueKind`, `Record`
//! - **Traits**: `Validate`, `ValidateExt`, `AsValidatable`
//! - **Errors**: `ErrorEntry`, `ValidationError`, `ErrorMap`, `SchemaError`
//!
//! # Architecture
//!
//! Every input is lowered into a [`Value`]. A validator inspects it through
//! [`AsValidatable`], which either yields the shape the validator expects or
//! a named mismatch error. Failures are plain data: a symbolic key plus
//! positional params, collected per field into an [`ErrorMap`] and rendered
//! later through a [`MessageCatalog`](crate::message::MessageCatalog).
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let validator = min_char(5).and(max_char(20));
//! assert!(validator.validate(&Value::from("hello")).is_ok());
//! assert!(validator.validate(&Value::from("hi")).is_err());
//! ```

// Module declarations
pub mod error;
pub mod traits;
pub mod validatable;
pub mod value;

// Re-export everything at the core level for convenience
pub use error::{ErrorEntry, ErrorMap, Params, SchemaError, ValidationError};
pub use traits::{BoxedValidator, Validate, ValidateExt};
pub use validatable::{AsValidatable, NOT_A_NUMBER, NOT_A_SLICE, NOT_A_STRING, NOT_A_TIMESTAMP};
pub use value::{Number, Record, Value, ValueKind};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with a single validator.
///
/// This is a convenience function for one-off validations.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{validate_value, Value};
/// use fieldcheck_validator::validators::min_char;
///
/// assert!(validate_value(&Value::from("hello"), &min_char(5)).is_ok());
/// ```
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &Value, validator: &V) -> Result<(), ValidationError>
where
    V: Validate + ?Sized,
{
    validator.validate(value)
}

/// Validates a value with multiple validators, merging every failure.
///
/// All validators run. Entries are merged by key; a later failure with a
/// key already present replaces the earlier params.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{validate_with_all, Validate, Value};
/// use fieldcheck_validator::validators::{matches_regex, non_empty};
///
/// let alnum = matches_regex("^[a-zA-Z0-9]+$").unwrap();
/// let validators: [&dyn Validate; 2] = [&non_empty(), &alnum];
/// let error = validate_with_all(&Value::from("bad name!"), &validators).unwrap_err();
/// assert!(error.contains_key("regex"));
/// ```
pub fn validate_with_all<V>(value: &Value, validators: &[V]) -> Result<(), ValidationError>
where
    V: Validate,
{
    let mut merged: Option<ValidationError> = None;

    for validator in validators {
        if let Err(e) = validator.validate(value) {
            tracing::trace!(validator = validator.name(), keys = %e, "validator failed");
            match merged.as_mut() {
                Some(acc) => acc.merge(e),
                None => merged = Some(e),
            }
        }
    }

    merged.map_or(Ok(()), Err)
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
