//! Dynamic record validation.

use fieldcheck_validator::prelude::*;
use pretty_assertions::assert_eq;

use crate::common::keys;

fn signup_validator() -> RecordValidator {
    RecordValidator::new()
        .rule("username", non_empty())
        .rule("age", greater_than(3.0).and(lower_than(120.0)))
        .rule("email", email())
        .rule("tags", non_empty().and(max_char(8).each()))
}

#[test]
fn invalid_record() {
    let record = Record::new()
        .with_field("username", "")
        .with_field("age", 2)
        .with_field("email", "foo@bar.")
        .with_field("tags", vec!["ok", "far-too-long"]);

    let errors = signup_validator().validate(&Value::from(record)).unwrap();
    assert_eq!(keys(&errors, "username"), ["nonZero"]);
    assert_eq!(keys(&errors, "age"), ["greaterThan"]);
    assert_eq!(keys(&errors, "email"), ["email"]);
    assert_eq!(keys(&errors, "tags"), ["each", "maxChar"]);

    let messages = errors.to_messages(&MessageCatalog::default());
    assert_eq!(messages["age"]["greaterThan"], "2 is not greater than 3");
    assert_eq!(
        messages["tags"]["each"],
        "1 of 2 elements are invalid (indices 1)"
    );
    assert_eq!(messages["tags"]["maxChar"], "too long, maximum 8 characters");
}

#[test]
fn valid_record() {
    let record = Record::new()
        .with_field("username", "alice")
        .with_field("age", 30)
        .with_field("email", "alice@example.com")
        .with_field("tags", vec!["rust"]);

    let errors = signup_validator().validate(&Value::from(record)).unwrap();
    assert!(!errors.has_errors());
}

#[test]
fn wrong_shapes_are_reported_per_field() {
    let record = Record::new()
        .with_field("username", "alice")
        .with_field("age", "thirty")
        .with_field("email", 42)
        .with_field("tags", "rust");

    let errors = signup_validator().validate(&Value::from(record)).unwrap();
    assert_eq!(keys(&errors, "age"), ["NaN"]);
    assert_eq!(keys(&errors, "email"), ["notString"]);
    assert_eq!(keys(&errors, "tags"), ["notSlice"]);

    let messages = errors.to_messages(&MessageCatalog::default());
    assert_eq!(messages["age"]["NaN"], "expected a number, got text");
}

#[test]
fn schema_errors_abort() {
    let validator = signup_validator();
    assert_eq!(
        validator.validate(&Value::from(7)).unwrap_err(),
        SchemaError::NotARecord {
            found: ValueKind::Int
        }
    );

    let partial = Record::new().with_field("username", "alice");
    assert_eq!(
        validator.validate(&Value::from(partial)).unwrap_err(),
        SchemaError::MissingField { field: "age".into() }
    );
}
