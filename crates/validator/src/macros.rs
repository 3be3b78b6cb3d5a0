//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`] - Create a complete validator (struct + Validate impl + factory fn)
//! - [`compose!`] - Merge several validators into one [`Composite`](crate::combinators::Composite)
//!
//! The `for <Shape>` clause names the view the rule works on. The macro
//! extracts it through [`AsValidatable`](crate::foundation::AsValidatable),
//! so a value of the wrong shape fails with the matching mismatch key
//! before the rule runs.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::validator;
//! use fieldcheck_validator::foundation::ValidationError;
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     error(input) { ValidationError::new("notBlank") }
//!     fn not_blank();
//! }
//!
//! // Struct with fields
//! validator! {
//!     #[derive(Copy, PartialEq)]
//!     pub AtLeast { min: f64 } for f64;
//!     rule(self, input) { input >= self.min }
//!     error(self, input) { ValidationError::new("atLeast").with_param(input).with_param(self.min) }
//!     fn at_least(min: f64);
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub NonEmpty for Value;
///     rule(input) { !input.is_zero() }
///     error(input) { ValidationError::new("nonZero") }
///     fn non_empty();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq)]
///     pub GreaterThan { bound: f64 } for f64;
///     rule(self, input) { input > self.bound }
///     error(self, input) { ValidationError::new("greaterThan") }
///     fn greater_than(bound: f64);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub MinChar { min: usize, mode: LengthMode } for str;
///     rule(self, input) { self.mode.measure(input) >= self.min }
///     error(self, input) { ValidationError::new("minChar").with_param(self.min) }
///     new(min: usize) { Self { min, mode: LengthMode::Chars } }
///     fn min_char(min: usize);
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the error type):
/// ```rust,ignore
/// validator! {
///     pub MatchesRegex { pattern: regex::Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     error(self, input) { ValidationError::new("regex") }
///     new(pattern: &str) -> SchemaError { ... }
///     fn matches_regex(pattern: &str) -> SchemaError;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 1a: Unit validator (no fields) + factory fn ──────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit validator (no fields), no factory ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(
                &self,
                value: &$crate::foundation::Value,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                let $inp = <$crate::foundation::Value as $crate::foundation::AsValidatable<$input>>::as_validatable(value)?;
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Variant 3a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            @define
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3c: Struct with fields + fallible new + fallible factory ─
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $crate::validator! {
            @define
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            @define
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Internal: struct definition + Validate impl ──────────────────────
    (
        @define
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(
                &$self_,
                value: &$crate::foundation::Value,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                let $inp = <$crate::foundation::Value as $crate::foundation::AsValidatable<$input>>::as_validatable(value)?;
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// COMPOSITION MACRO
// ============================================================================

/// Builds a [`Composite`](crate::combinators::Composite) from a list of validators.
///
/// Every validator runs; failures are merged by key.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
/// use fieldcheck_validator::compose;
///
/// let username = compose![non_empty(), min_char(3), max_char(20)];
/// assert!(username.validate(&Value::from("alice")).is_ok());
/// assert!(username.validate(&Value::from("")).is_err());
/// ```
#[macro_export]
macro_rules! compose {
    ($($validator:expr),* $(,)?) => {
        $crate::combinators::Composite::new()$(.with($validator))*
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{SchemaError, Validate, ValidationError, Value};

    // Test 1: Unit validator (no fields)
    validator! {
        /// A test unit validator.
        TestNotBlank for str;
        rule(input) { !input.trim().is_empty() }
        error(input) { ValidationError::new("notBlank") }
        fn test_not_blank();
    }

    #[test]
    fn test_unit_validator() {
        let v = TestNotBlank;
        assert!(v.validate(&Value::from("hello")).is_ok());
        assert!(v.validate(&Value::from("   ")).is_err());
    }

    #[test]
    fn test_unit_factory() {
        assert!(test_not_blank().validate(&Value::from("x")).is_ok());
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let err = test_not_blank().validate(&Value::from(3)).unwrap_err();
        assert!(err.contains_key("notString"));
    }

    // Test 2: Struct with fields + auto new
    validator! {
        #[derive(Copy, PartialEq)]
        TestAtLeast { min: f64 } for f64;
        rule(self, input) { input >= self.min }
        error(self, input) {
            ValidationError::new("atLeast").with_param(input).with_param(self.min)
        }
        fn test_at_least(min: f64);
    }

    #[test]
    fn test_struct_validator() {
        let v = TestAtLeast { min: 3.0 };
        assert!(v.validate(&Value::from(3)).is_ok());
        let err = v.validate(&Value::from(2.5)).unwrap_err();
        assert_eq!(err.entries()[0].params(), ["2.5", "3"]);
    }

    #[test]
    fn test_struct_factory() {
        assert!(test_at_least(1.0).validate(&Value::from(0)).is_err());
        assert!(TestAtLeast::new(1.0).validate(&Value::from(1)).is_ok());
    }

    // Test 3: Custom constructor
    validator! {
        TestPrefix { prefix: String } for str;
        rule(self, input) { input.starts_with(&self.prefix) }
        error(self, input) { ValidationError::new("prefix").with_param(&self.prefix) }
        new(prefix: &str) { Self { prefix: prefix.to_owned() } }
        fn test_prefix(prefix: &str);
    }

    #[test]
    fn test_custom_new() {
        let v = test_prefix("ab");
        assert!(v.validate(&Value::from("abc")).is_ok());
        assert!(v.validate(&Value::from("cab")).is_err());
    }

    // Test 4: Fallible constructor
    validator! {
        TestNonNegativeLimit { limit: f64 } for f64;
        rule(self, input) { input <= self.limit }
        error(self, input) { ValidationError::new("limit") }
        new(limit: f64) -> SchemaError {
            if limit < 0.0 {
                return Err(SchemaError::UnknownField { field: "limit".into() });
            }
            Ok(Self { limit })
        }
        fn test_limit(limit: f64) -> SchemaError;
    }

    #[test]
    fn test_fallible_new() {
        assert!(test_limit(-1.0).is_err());
        let v = test_limit(10.0).unwrap();
        assert!(v.validate(&Value::from(11)).is_err());
    }

    #[test]
    fn test_compose() {
        let v = compose![TestAtLeast::new(1.0), test_limit(10.0).unwrap()];
        assert!(v.validate(&Value::from(5)).is_ok());
        assert!(v.validate(&Value::from(0)).is_err());
        assert!(v.validate(&Value::from(11)).is_err());
    }
}
