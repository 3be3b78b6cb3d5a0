//! Integration tests for the prelude module.
//!
//! Verifies that `use fieldcheck_validator::prelude::*` brings in everything
//! a consumer needs for common validation scenarios.

use fieldcheck_validator::compose;
use fieldcheck_validator::prelude::*;

// ============================================================================
// PRELUDE IMPORT SMOKE TEST
// ============================================================================

#[test]
fn prelude_import_provides_validate_trait() {
    let v = min_char(3).and(max_char(20));
    assert!(v.validate(&Value::from("hello")).is_ok());
    assert!(v.validate(&Value::from("hi")).is_err());
}

#[test]
fn compose_macro_via_prelude() {
    let username = compose![non_empty(), min_char(3), matches_regex("^[a-z]+$").unwrap()];
    let err = username.validate(&Value::from("A")).unwrap_err();
    let keys: Vec<_> = err.entries().iter().map(ErrorEntry::key).collect();
    assert_eq!(keys, [MIN_CHAR, REGEX]);
}

#[test]
fn boxed_validators_in_a_table() {
    let rules: Vec<(&str, Box<dyn Validate + Send + Sync>)> = vec![
        ("id", uuid().boxed()),
        ("email", email().boxed()),
    ];
    let record = Record::new()
        .with_field("id", "e3ef5847-2e83-4c67-be80-4e1c832afc4a")
        .with_field("email", "nobody");

    let mut errors = ErrorMap::new();
    for (field, rule) in &rules {
        let value = record.get(field).unwrap();
        errors.add(field, value, &[&**rule]);
    }
    assert_eq!(errors.fields().collect::<Vec<_>>(), ["email"]);
}

#[test]
fn error_map_into_result() {
    let mut errors = ErrorMap::new();
    errors.add("name", &Value::from(""), &[&non_empty()]);

    let err = errors.into_result().unwrap_err();
    assert!(err.to_string().contains("name: nonZero"));
}
