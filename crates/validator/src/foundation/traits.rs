//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators must implement.

use std::sync::Arc;

use crate::combinators::{Composite, Each};
use crate::foundation::{ValidationError, Value};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// A validator is a pure predicate over a [`Value`] and its own fixed
/// constraint. It owns no mutable state, so one instance can be shared and
/// reused across calls and threads.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{AsValidatable, Validate, ValidationError, Value};
///
/// struct Contains {
///     needle: String,
/// }
///
/// impl Validate for Contains {
///     fn validate(&self, value: &Value) -> Result<(), ValidationError> {
///         let text: &str = <Value as AsValidatable<str>>::as_validatable(value)?;
///         if text.contains(&self.needle) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("contains")
///                 .with_param(text)
///                 .with_param(&self.needle))
///         }
///     }
/// }
///
/// let validator = Contains { needle: "test.com".into() };
/// assert!(validator.validate(&Value::from("me@test.com")).is_ok());
/// assert!(validator.validate(&Value::from("me@example.com")).is_err());
/// ```
pub trait Validate {
    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` with one or more symbolic entries otherwise
    fn validate(&self, value: &Value) -> Result<(), ValidationError>;

    /// Returns the name of this validator.
    ///
    /// Used for tracing and debugging.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        (**self).validate(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        (**self).validate(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        (**self).validate(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A type-erased validator that can live inside rule tables.
pub type BoxedValidator = Box<dyn Validate + Send + Sync>;

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every sized, thread-safe `Validate`.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let age = greater_than(3.0).and(lower_than(120.0));
/// assert!(age.validate(&Value::from(20)).is_ok());
/// assert!(age.validate(&Value::from(150)).is_err());
/// ```
pub trait ValidateExt: Validate + Sized + Send + Sync + 'static {
    /// Runs `self` then `other` against the same value, merging failures.
    ///
    /// Unlike a short-circuiting AND, both validators always run.
    fn and<V>(self, other: V) -> Composite
    where
        V: Validate + Send + Sync + 'static,
    {
        Composite::new().with(self).with(other)
    }

    /// Applies `self` to every element of a sequence.
    fn each(self) -> Each<Self> {
        Each::new(self)
    }

    /// Erases the concrete type.
    fn boxed(self) -> BoxedValidator {
        Box::new(self)
    }
}

impl<T: Validate + Send + Sync + 'static> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
