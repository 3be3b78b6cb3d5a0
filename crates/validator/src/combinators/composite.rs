//! COMPOSITE combinator - runs several validators against one value
//!
//! Unlike a short-circuiting AND, every child runs and their failures are
//! merged into a single [`ValidationError`] keyed by error key.

use std::fmt;

use crate::foundation::{BoxedValidator, Validate, ValidationError, Value, validate_with_all};

/// An ordered list of validators applied to the same value.
///
/// Merge policy: distinct keys accumulate in execution order; when two
/// children fail with the same key, the later child's params replace the
/// earlier ones in place. No severity ranking is applied.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::combinators::Composite;
/// use fieldcheck_validator::foundation::{Validate, Value};
/// use fieldcheck_validator::validators::{greater_than, lower_than};
///
/// let age = Composite::new().with(greater_than(3.0)).with(lower_than(120.0));
///
/// assert!(age.validate(&Value::from(20)).is_ok());
/// let error = age.validate(&Value::from(150)).unwrap_err();
/// assert_eq!(error.len(), 1);
/// assert!(error.contains_key("lowerThan"));
/// ```
#[derive(Default)]
pub struct Composite {
    validators: Vec<BoxedValidator>,
}

impl Composite {
    /// Creates an empty composite, which accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<V>(mut self, validator: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
    {
        self.push(validator);
        self
    }

    /// Appends a validator; same as [`with`](Self::with).
    ///
    /// Keeps `a.and(b).and(c)` flat instead of nesting composites.
    #[must_use = "builder methods must be chained or built"]
    pub fn and<V>(self, validator: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
    {
        self.with(validator)
    }

    /// Appends a validator in place.
    pub fn push<V>(&mut self, validator: V)
    where
        V: Validate + Send + Sync + 'static,
    {
        self.validators.push(Box::new(validator));
    }

    /// Number of child validators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if there are no child validators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Validate for Composite {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        validate_with_all(value, &self.validators)
    }
}

impl FromIterator<BoxedValidator> for Composite {
    fn from_iter<I: IntoIterator<Item = BoxedValidator>>(iter: I) -> Self {
        Self {
            validators: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.validators.iter().map(|v| v.name()))
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
