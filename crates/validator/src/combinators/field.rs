//! FIELD dispatch - validates named fields of an entity
//!
//! Two entry points share the same rule shape (field name to an ordered
//! list of validators):
//!
//! - [`StructValidator`] works on a typed entity through a [`FieldTable`]
//!   declared once per type. Unknown field names are rejected when the
//!   rule is added, so validation itself cannot fail.
//! - [`RecordValidator`] works on a dynamic [`Value::Record`]. Shape
//!   problems are only visible at validation time and surface as
//!   [`SchemaError`].

use std::fmt;

use indexmap::IndexMap;

use crate::foundation::{BoxedValidator, ErrorMap, SchemaError, Validate, Value};

/// Reads one field of `T` as a [`Value`].
pub type Getter<T> = fn(&T) -> Value;

fn run_rules(errors: &mut ErrorMap, field: &str, value: &Value, validators: &[BoxedValidator]) {
    tracing::trace!(field, validators = validators.len(), "validating field");
    let validators: Vec<&dyn Validate> = validators
        .iter()
        .map(|v| &**v as &dyn Validate)
        .collect();
    errors.add(field, value, &validators);
}

// ============================================================================
// FIELD TABLE
// ============================================================================

/// Name to getter lookup for an entity type.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::combinators::FieldTable;
/// use fieldcheck_validator::foundation::Value;
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// let table = FieldTable::<User>::new()
///     .field("name", |u| Value::from(&u.name))
///     .field("age", |u| Value::from(u.age));
///
/// assert!(table.contains("age"));
/// assert!(!table.contains("nickname"));
/// ```
pub struct FieldTable<T> {
    getters: IndexMap<&'static str, Getter<T>>,
}

impl<T> FieldTable<T> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            getters: IndexMap::new(),
        }
    }

    /// Declares a field. Declaring the same name twice replaces the getter.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: &'static str, getter: Getter<T>) -> Self {
        self.getters.insert(name, getter);
        self
    }

    /// Looks up a getter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Getter<T>> {
        self.getters.get(name).copied()
    }

    /// Returns true if the field is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.getters.contains_key(name)
    }

    /// Declared field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.getters.keys().copied()
    }
}

impl<T> Default for FieldTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FieldTable<T> {
    fn clone(&self) -> Self {
        Self {
            getters: self.getters.clone(),
        }
    }
}

impl<T> fmt::Debug for FieldTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldTable")
            .field("fields", &self.getters.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// STRUCT VALIDATOR
// ============================================================================

struct FieldRules<T> {
    getter: Getter<T>,
    validators: Vec<BoxedValidator>,
}

/// Validates typed entities field by field.
///
/// Rules for the same field run in the order they were added and append
/// to that field's entry list. Fields whose validators all pass do not
/// appear in the result.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// struct User {
///     password: String,
///     age: i64,
/// }
///
/// let table = FieldTable::<User>::new()
///     .field("password", |u| Value::from(&u.password))
///     .field("age", |u| Value::from(u.age));
///
/// let validator = StructValidator::new(table)
///     .rule("password", non_empty().and(min_char(8)))?
///     .rule("age", greater_than(3.0).and(lower_than(120.0)))?;
///
/// let errors = validator.validate(&User { password: "123".into(), age: 20 });
/// assert!(errors.errors_for_field("password").is_some());
/// assert!(errors.errors_for_field("age").is_none());
///
/// assert!(StructValidator::new(FieldTable::<User>::new()).rule("nope", non_empty()).is_err());
/// # Ok::<(), SchemaError>(())
/// ```
pub struct StructValidator<T> {
    table: FieldTable<T>,
    rules: IndexMap<&'static str, FieldRules<T>>,
}

impl<T> StructValidator<T> {
    /// Creates a validator with no rules over the given field table.
    #[must_use]
    pub fn new(table: FieldTable<T>) -> Self {
        Self {
            table,
            rules: IndexMap::new(),
        }
    }

    /// Adds a validator for a declared field.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownField`] if `field` is not in the table.
    pub fn rule<V>(mut self, field: &str, validator: V) -> Result<Self, SchemaError>
    where
        V: Validate + Send + Sync + 'static,
    {
        let Some((name, getter)) = self
            .table
            .getters
            .get_key_value(field)
            .map(|(name, getter)| (*name, *getter))
        else {
            return Err(SchemaError::UnknownField {
                field: field.to_owned(),
            });
        };

        self.rules
            .entry(name)
            .or_insert_with(|| FieldRules {
                getter,
                validators: Vec::new(),
            })
            .validators
            .push(Box::new(validator));
        Ok(self)
    }

    /// Names of the fields that carry at least one rule.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    /// Validates an entity, collecting failures per field.
    pub fn validate(&self, entity: &T) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for (field, rules) in &self.rules {
            let value = (rules.getter)(entity);
            run_rules(&mut errors, field, &value, &rules.validators);
        }
        if errors.has_errors() {
            tracing::debug!(failed = errors.len(), "entity failed validation");
        }
        errors
    }
}

impl<T> fmt::Debug for StructValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (field, rules) in &self.rules {
            map.entry(field, &rules.validators.len());
        }
        map.finish()
    }
}

// ============================================================================
// RECORD VALIDATOR
// ============================================================================

/// Validates dynamic [`Value::Record`] inputs field by field.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let validator = RecordValidator::new()
///     .rule("email", email())
///     .rule("age", lower_than(120.0));
///
/// let record = Record::new().with_field("email", "@test").with_field("age", 150);
/// let errors = validator.validate(&Value::from(record))?;
/// assert_eq!(errors.len(), 2);
///
/// let missing = Value::from(Record::new().with_field("email", "a@b.c"));
/// assert!(matches!(
///     validator.validate(&missing),
///     Err(SchemaError::MissingField { .. })
/// ));
/// # Ok::<(), SchemaError>(())
/// ```
#[derive(Default)]
pub struct RecordValidator {
    rules: IndexMap<String, Vec<BoxedValidator>>,
}

impl RecordValidator {
    /// Creates a validator with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a validator for a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<V>(mut self, field: impl Into<String>, validator: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
    {
        self.rules
            .entry(field.into())
            .or_default()
            .push(Box::new(validator));
        self
    }

    /// Names of the fields that carry at least one rule.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Validates a record value.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::NotARecord`] if `value` is not a record.
    /// - [`SchemaError::MissingField`] if a ruled field is absent.
    ///
    /// Either aborts the whole call; no partial map is returned.
    pub fn validate(&self, value: &Value) -> Result<ErrorMap, SchemaError> {
        let record = value.as_record().ok_or(SchemaError::NotARecord {
            found: value.kind(),
        })?;

        let mut errors = ErrorMap::new();
        for (field, validators) in &self.rules {
            let field_value = record.get(field).ok_or_else(|| SchemaError::MissingField {
                field: field.clone(),
            })?;
            run_rules(&mut errors, field, field_value, validators);
        }
        Ok(errors)
    }
}

impl fmt::Debug for RecordValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (field, validators) in &self.rules {
            map.entry(field, &validators.len());
        }
        map.finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
