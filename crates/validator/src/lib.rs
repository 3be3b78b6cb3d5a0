//! # fieldcheck-validator
//!
//! Declarative field validation with symbolic, localizable errors.
//!
//! ## Quick Start
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! struct User {
//!     username: String,
//!     age: i64,
//!     email: String,
//! }
//!
//! let table = FieldTable::<User>::new()
//!     .field("username", |u| Value::from(&u.username))
//!     .field("age", |u| Value::from(u.age))
//!     .field("email", |u| Value::from(&u.email));
//!
//! let validator = StructValidator::new(table)
//!     .rule("username", non_empty().and(matches_regex("^[a-zA-Z0-9]+$")?))?
//!     .rule("age", greater_than(3.0).and(lower_than(120.0)))?
//!     .rule("email", email())?;
//!
//! let errors = validator.validate(&User {
//!     username: "not-valid-username*".into(),
//!     age: 150,
//!     email: "@test".into(),
//! });
//!
//! let messages = errors.to_messages(&MessageCatalog::default());
//! assert_eq!(messages["age"]["lowerThan"], "150 is not lower than 120");
//! # Ok::<(), SchemaError>(())
//! ```
//!
//! ## Model
//!
//! Validators return data, not text: a failure is an error key such as
//! `minChar` plus positional params. An [`ErrorMap`](foundation::ErrorMap)
//! collects them per field, and a [`MessageCatalog`](message::MessageCatalog)
//! turns them into messages at the edge.
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **Presence**: [`NonEmpty`](validators::NonEmpty)
//! - **Numeric**: [`GreaterThan`](validators::GreaterThan), [`LowerThan`](validators::LowerThan)
//! - **Length**: [`MinChar`](validators::MinChar), [`MaxChar`](validators::MaxChar)
//! - **Content**: [`Email`](validators::Email), [`MatchesRegex`](validators::MatchesRegex),
//!   [`Uuid`](validators::Uuid)
//! - **Time**: [`Before`](validators::Before), [`After`](validators::After)

pub mod combinators;
pub mod foundation;
mod macros;
pub mod message;
pub mod prelude;
pub mod validators;
