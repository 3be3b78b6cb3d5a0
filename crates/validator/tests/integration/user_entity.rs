//! End-to-end validation of a typed entity.

use chrono::{DateTime, Utc};
use fieldcheck_validator::prelude::*;
use pretty_assertions::assert_eq;

use crate::common::{init_tracing, jan_first, keys};
use crate::custom_validator::{CONTAINS, contains};

struct User {
    username: String,
    password: String,
    name: String,
    age: i64,
    email: String,
    birthday: DateTime<Utc>,
}

fn user_validator() -> Result<StructValidator<User>, SchemaError> {
    let table = FieldTable::<User>::new()
        .field("username", |u| Value::from(&u.username))
        .field("password", |u| Value::from(&u.password))
        .field("name", |u| Value::from(&u.name))
        .field("age", |u| Value::from(u.age))
        .field("email", |u| Value::from(&u.email))
        .field("birthday", |u| Value::from(u.birthday));

    StructValidator::new(table)
        .rule("username", non_empty())?
        .rule("username", matches_regex("^[a-zA-Z0-9]+$")?)?
        .rule("password", non_empty().and(min_char(8)))?
        .rule("name", non_empty())?
        .rule("age", greater_than(3.0).and(lower_than(120.0)))?
        .rule("email", email())?
        .rule("email", contains("test.com"))?
        .rule(
            "birthday",
            before(jan_first(1990)).and(after(jan_first(1900))),
        )
}

fn invalid_user() -> User {
    User {
        username: "not-valid-username*".into(),
        password: "123".into(),
        name: String::new(),
        age: 150,
        email: "@test".into(),
        birthday: jan_first(1991),
    }
}

fn valid_user() -> User {
    User {
        username: "testuser".into(),
        password: "validPassword123".into(),
        name: "Good Name".into(),
        age: 20,
        email: "test@test.com".into(),
        birthday: jan_first(1980),
    }
}

#[test]
fn invalid_user_fails_every_field() {
    init_tracing();
    let validator = user_validator().unwrap();
    let errors = validator.validate(&invalid_user());

    assert!(errors.has_errors());
    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        ["username", "password", "name", "age", "email", "birthday"]
    );
    assert_eq!(keys(&errors, "username"), ["regex"]);
    assert_eq!(keys(&errors, "password"), ["minChar"]);
    assert_eq!(keys(&errors, "name"), ["nonZero"]);
    assert_eq!(keys(&errors, "age"), ["lowerThan"]);
    assert_eq!(keys(&errors, "email"), ["email", CONTAINS]);
    assert_eq!(keys(&errors, "birthday"), ["before"]);
}

#[test]
fn invalid_user_messages() {
    let errors = user_validator().unwrap().validate(&invalid_user());
    let messages = errors.to_messages(&MessageCatalog::default());

    assert_eq!(messages["name"]["nonZero"], "value cannot be empty");
    assert_eq!(messages["age"]["lowerThan"], "150 is not lower than 120");
    assert_eq!(
        messages["password"]["minChar"],
        "too short, minimum 8 characters"
    );
    assert_eq!(
        messages["username"]["regex"],
        "'not-valid-username*' does not match '^[a-zA-Z0-9]+$'"
    );
    assert_eq!(
        messages["email"]["email"],
        "'@test' is an invalid email address"
    );
    assert_eq!(messages["email"][CONTAINS], "invalid data");
    assert_eq!(
        messages["birthday"]["before"],
        "1991-01-01 01:00:00 UTC is not before 1990-01-01 01:00:00 UTC"
    );
}

#[test]
fn valid_user_has_no_errors() {
    let errors = user_validator().unwrap().validate(&valid_user());
    assert!(!errors.has_errors());
    assert!(errors.to_messages(&MessageCatalog::default()).is_empty());
}

#[test]
fn validator_is_shareable_across_threads() {
    let validator = std::sync::Arc::new(user_validator().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validator = std::sync::Arc::clone(&validator);
            std::thread::spawn(move || {
                let user = if i % 2 == 0 { valid_user() } else { invalid_user() };
                validator.validate(&user).has_errors()
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, [false, true, false, true]);
}

#[test]
fn errors_serialize_for_transport() {
    let errors = user_validator().unwrap().validate(&invalid_user());
    let json = serde_json::to_value(&errors).unwrap();

    assert_eq!(
        json["age"],
        serde_json::json!([{ "key": "lowerThan", "params": ["150", "120"] }])
    );
    assert_eq!(
        json["name"],
        serde_json::json!([{ "key": "nonZero", "params": [] }])
    );
}
