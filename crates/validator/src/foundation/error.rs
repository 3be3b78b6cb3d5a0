//! Error types for validation failures
//!
//! Three layers, leaf to root:
//!
//! - [`ErrorEntry`]: one symbolic failure (`key`) plus positional params.
//! - [`ValidationError`]: what a single validator returns, a key-unique
//!   set of entries. Atomic validators produce one entry, composites may
//!   produce several.
//! - [`ErrorMap`]: the per-call aggregate, field name to entry list.
//!
//! [`SchemaError`] is separate: it signals a wiring mistake (unknown field,
//! bad pattern) rather than invalid data, and aborts the call.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;

use crate::foundation::{Validate, Value, ValueKind};
use crate::message::{MessageCatalog, Messages};

/// Positional message params. Most entries carry two or fewer.
pub type Params = SmallVec<[String; 2]>;

// ============================================================================
// ERROR ENTRY
// ============================================================================

/// A single symbolic failure.
///
/// The key never embeds a field name; params are already formatted and
/// line up with the `%v` placeholders of the key's template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    key: Cow<'static, str>,
    params: Params,
}

impl ErrorEntry {
    /// Creates an entry without params.
    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key: key.into(),
            params: Params::new(),
        }
    }

    /// Appends a positional param.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, param: impl fmt::Display) -> Self {
        self.params.push(param.to_string());
        self
    }

    /// The symbolic key, e.g. `"minChar"`.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Params in placeholder order.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)?;
        if !self.params.is_empty() {
            write!(f, "({})", self.params.join(", "))?;
        }
        Ok(())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// The failure returned by one validator.
///
/// Entries are unique by key. Merging an entry whose key is already present
/// replaces that entry's params in place, so the slot keeps its original
/// position and the last writer wins.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("minChar").with_param(8);
/// assert_eq!(error.entries()[0].key(), "minChar");
/// assert_eq!(error.entries()[0].params(), ["8"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    entries: Vec<ErrorEntry>,
}

impl ValidationError {
    /// Creates an error with a single entry.
    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Self::from_entry(ErrorEntry::new(key))
    }

    /// Wraps an existing entry.
    #[must_use]
    pub fn from_entry(entry: ErrorEntry) -> Self {
        Self {
            entries: vec![entry],
        }
    }

    /// Appends a param to the most recently added entry.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, param: impl fmt::Display) -> Self {
        if let Some(last) = self.entries.pop() {
            self.entries.push(last.with_param(param));
        }
        self
    }

    /// Builds a shape-mismatch error naming the offending value's kind.
    pub fn shape_mismatch(key: impl Into<Cow<'static, str>>, found: &Value) -> Self {
        Self::new(key).with_param(found.kind())
    }

    /// Builds a shape-mismatch error from a kind alone.
    pub fn kind_mismatch(key: impl Into<Cow<'static, str>>, found: ValueKind) -> Self {
        Self::new(key).with_param(found)
    }

    /// Merges another error into this one, overwriting same-key entries.
    pub fn merge(&mut self, other: ValidationError) {
        for entry in other.entries {
            match self.entries.iter_mut().find(|e| e.key == entry.key) {
                Some(slot) => slot.params = entry.params,
                None => self.entries.push(entry),
            }
        }
    }

    /// Returns true if an entry with this key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Looks up the entry for a key.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&ErrorEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// All entries in first-insertion order.
    #[must_use]
    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for errors built through the public API.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the error and returns its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<ErrorEntry> {
        self.entries
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(entry.key())?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<ErrorEntry> for ValidationError {
    fn from(entry: ErrorEntry) -> Self {
        Self::from_entry(entry)
    }
}

// ============================================================================
// ERROR MAP
// ============================================================================

/// Per-call aggregate: field name to the ordered entries it failed with.
///
/// A field is present iff at least one of its validators failed. Fields
/// appear in the order they first failed.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{ErrorMap, Value};
/// use fieldcheck_validator::validators::{min_char, non_empty};
///
/// let password = Value::from("123");
/// let mut errors = ErrorMap::new();
/// errors.add("password", &password, &[&non_empty(), &min_char(8)]);
///
/// assert!(errors.has_errors());
/// let entries = errors.errors_for_field("password").unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].key(), "minChar");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    fields: IndexMap<String, Vec<ErrorEntry>>,
}

impl ErrorMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs each validator against `value`, appending failures under `field`.
    pub fn add(&mut self, field: &str, value: &Value, validators: &[&dyn Validate]) {
        for validator in validators {
            if let Err(error) = validator.validate(value) {
                tracing::debug!(field, keys = %error, "field failed validation");
                self.record(field, error);
            }
        }
    }

    /// Appends every entry of an error under `field`.
    pub fn record(&mut self, field: &str, error: ValidationError) {
        if error.is_empty() {
            return;
        }
        match self.fields.get_mut(field) {
            Some(entries) => entries.extend(error.into_entries()),
            None => {
                self.fields.insert(field.to_owned(), error.into_entries());
            }
        }
    }

    /// Returns true if any field failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Entries recorded for a field, or `None` if the field is valid.
    #[must_use]
    pub fn errors_for_field(&self, field: &str) -> Option<&[ErrorEntry]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Names of the failed fields.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates over `(field, entries)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ErrorEntry])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Renders every entry through the catalog.
    ///
    /// Two entries with the same key under one field collapse into a
    /// single message; the later one wins. Never fails.
    #[must_use]
    pub fn to_messages(&self, catalog: &MessageCatalog) -> Messages {
        self.fields
            .iter()
            .map(|(field, entries)| {
                let rendered = entries
                    .iter()
                    .map(|entry| (entry.key().to_owned(), catalog.render(entry)))
                    .collect();
                (field.clone(), rendered)
            })
            .collect()
    }

    /// Converts to a `Result`, `Ok` when no field failed.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ErrorMap> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed for {} field(s):", self.fields.len())?;
        for (field, entries) in &self.fields {
            write!(f, "  {field}:")?;
            for entry in entries {
                write!(f, " {entry}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorMap {}

// ============================================================================
// SCHEMA ERROR
// ============================================================================

/// A wiring mistake between validator configuration and the data.
///
/// Unlike [`ValidationError`] this is not a property of the input; the
/// current construction or validation call is aborted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// A rule names a field the entity's field table does not declare.
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    /// A record validator received a value that is not a record.
    #[error("expected a record, got {found}")]
    NotARecord { found: ValueKind },

    /// A record is missing a field a rule was declared for.
    #[error("record has no field '{field}'")]
    MissingField { field: String },

    /// A regex constraint failed to compile.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl SchemaError {
    pub(crate) fn invalid_pattern(pattern: &str, source: &regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_owned(),
            reason: source.to_string(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
