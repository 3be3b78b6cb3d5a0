//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck_validator::prelude::*;` import that
//! brings in the value model, traits, errors, validators, combinators and
//! the message catalog.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let password = non_empty().and(min_char(8));
//! let tags = max_char(12).each();
//! assert!(password.validate(&Value::from("correct horse")).is_ok());
//! assert!(tags.validate(&Value::from(vec!["rust", "a-very-long-tag"])).is_err());
//! ```

// ============================================================================
// FOUNDATION: Values, traits, errors
// ============================================================================

pub use crate::foundation::{
    AsValidatable, ErrorEntry, ErrorMap, Record, SchemaError, Validate, ValidateExt,
    ValidationError, ValidationResult, Value, ValueKind,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    Composite, Each, FieldTable, RecordValidator, StructValidator, each,
};

// ============================================================================
// MESSAGES
// ============================================================================

pub use crate::message::{CatalogError, MessageCatalog, Messages};
