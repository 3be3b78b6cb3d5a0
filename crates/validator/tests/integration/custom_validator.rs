//! A validator defined outside the crate plugs into the same pipeline.

use fieldcheck_validator::foundation::NOT_A_STRING;
use fieldcheck_validator::prelude::*;
use fieldcheck_validator::validator;

pub const CONTAINS: &str = "customStringContainValidator";

/// Fails unless the text contains `needle`.
pub struct Contains {
    pub needle: String,
}

impl Validate for Contains {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let text: &str = <Value as AsValidatable<str>>::as_validatable(value)?;
        if text.contains(&self.needle) {
            Ok(())
        } else {
            Err(ValidationError::new(CONTAINS)
                .with_param(text)
                .with_param(&self.needle))
        }
    }
}

pub fn contains(needle: &str) -> Contains {
    Contains {
        needle: needle.to_owned(),
    }
}

validator! {
    /// Text that reads the same in both directions.
    pub Palindrome for str;
    rule(input) { input.chars().eq(input.chars().rev()) }
    error(input) { ValidationError::new("palindrome").with_param(input) }
    fn palindrome();
}

#[test]
fn custom_key_renders_as_fallback_until_registered() {
    let mut errors = ErrorMap::new();
    errors.add("username", &Value::from("invalid*"), &[&contains("admin")]);

    let messages = errors.to_messages(&MessageCatalog::default());
    assert_eq!(messages["username"][CONTAINS], "invalid data");

    let catalog = MessageCatalog::default().with_template(CONTAINS, "'%v' must contain '%v'");
    let messages = errors.to_messages(&catalog);
    assert_eq!(
        messages["username"][CONTAINS],
        "'invalid*' must contain 'admin'"
    );
}

#[test]
fn macro_defined_validator_outside_crate() {
    assert!(palindrome().validate(&Value::from("level")).is_ok());

    let err = palindrome().validate(&Value::from("rust")).unwrap_err();
    assert_eq!(err.entries()[0].key(), "palindrome");
    assert_eq!(err.entries()[0].params(), ["rust"]);

    let err = palindrome().validate(&Value::from(12)).unwrap_err();
    assert_eq!(err.entries()[0].key(), NOT_A_STRING);
}

#[test]
fn custom_validator_composes() {
    let validator = email().and(contains("test.com"));
    let err = validator.validate(&Value::from("@test")).unwrap_err();
    let keys: Vec<_> = err.entries().iter().map(ErrorEntry::key).collect();
    assert_eq!(keys, ["email", CONTAINS]);
}
