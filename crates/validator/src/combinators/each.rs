//! EACH combinator - validates each element of a sequence

use crate::foundation::{AsValidatable, Validate, ValidationError, Value};

/// Key reported by [`Each`] when one or more elements fail.
pub const EACH: &str = "each";

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Validates each element of a sequence value.
///
/// Every element is checked. On failure the `each` entry comes first,
/// with params `[failed_count, total_count, failed_indices]`, indices
/// comma-joined. It is followed by the inner entries, one per distinct key,
/// where the last failing element wins. A non-sequence value fails with
/// `notSlice`.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::combinators::Each;
/// use fieldcheck_validator::foundation::{Validate, Value};
/// use fieldcheck_validator::validators::min_char;
///
/// let validator = Each::new(min_char(3));
///
/// assert!(validator.validate(&Value::from(vec!["foo", "bar"])).is_ok());
///
/// let error = validator.validate(&Value::from(vec!["foo", "ab", "x"])).unwrap_err();
/// assert_eq!(error.entries()[0].params(), ["2", "3", "1,2"]);
/// assert_eq!(error.entries()[1].key(), "minChar");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Each<V> {
    inner: V,
}

impl<V> Each<V> {
    /// Creates a new EACH combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for Each<V> {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let items = <Value as AsValidatable<[Value]>>::as_validatable(value)?;

        let mut failed = Vec::new();
        let mut causes: Option<ValidationError> = None;
        for (index, item) in items.iter().enumerate() {
            if let Err(error) = self.inner.validate(item) {
                failed.push(index.to_string());
                match causes.as_mut() {
                    Some(causes) => causes.merge(error),
                    None => causes = Some(error),
                }
            }
        }

        let Some(causes) = causes else {
            return Ok(());
        };

        let mut error = ValidationError::new(EACH)
            .with_param(failed.len())
            .with_param(items.len())
            .with_param(failed.join(","));
        // a nested `each` must not overwrite this summary
        for entry in causes.into_entries() {
            if entry.key() != EACH {
                error.merge(entry.into());
            }
        }
        Err(error)
    }
}

/// Creates an EACH combinator.
pub fn each<V: Validate>(validator: V) -> Each<V> {
    Each::new(validator)
}

// ============================================================================
// TESTS
// ============================================================================
