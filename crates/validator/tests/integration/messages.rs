//! Message catalog configuration.

use fieldcheck_validator::prelude::*;
use pretty_assertions::assert_eq;

fn failing_password() -> ErrorMap {
    let mut errors = ErrorMap::new();
    errors.add("password", &Value::from("123"), &[&non_empty(), &min_char(8)]);
    errors
}

#[test]
fn json_overrides_apply_over_defaults() {
    let catalog = MessageCatalog::from_json(
        r#"{ "minChar": "doit contenir au moins %v caractères" }"#,
    )
    .unwrap();

    let messages = failing_password().to_messages(&catalog);
    assert_eq!(
        messages["password"]["minChar"],
        "doit contenir au moins 8 caract\u{e8}res"
    );
    assert_eq!(catalog.template("nonZero"), Some("value cannot be empty"));
}

#[test]
fn malformed_catalog_is_an_error() {
    let err = MessageCatalog::from_json("{ not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid message catalog"));
}

#[test]
fn catalog_round_trips_through_json() {
    let catalog = MessageCatalog::default().with_template("palindrome", "'%v' is not a palindrome");
    let json = serde_json::to_string(&catalog).unwrap();
    let restored = MessageCatalog::from_json(&json).unwrap();
    assert_eq!(restored, catalog);
}

#[test]
fn template_with_too_few_params_still_renders() {
    let catalog = MessageCatalog::default().with_template("minChar", "%v: need %v");
    let messages = failing_password().to_messages(&catalog);
    assert_eq!(messages["password"]["minChar"], "8: need %!v(MISSING)");
}

#[test]
fn repeated_key_under_one_field_collapses() {
    let mut errors = ErrorMap::new();
    errors.add("age", &Value::from(1), &[&greater_than(3.0), &greater_than(5.0)]);

    assert_eq!(errors.errors_for_field("age").unwrap().len(), 2);
    let messages = errors.to_messages(&MessageCatalog::default());
    assert_eq!(messages["age"].len(), 1);
    assert_eq!(messages["age"]["greaterThan"], "1 is not greater than 5");
}
