//! Basic usage example for fieldcheck-validator

use fieldcheck_validator::prelude::*;

struct Signup {
    username: String,
    password: String,
    age: i64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let table = FieldTable::<Signup>::new()
        .field("username", |s| Value::from(&s.username))
        .field("password", |s| Value::from(&s.password))
        .field("age", |s| Value::from(s.age));

    let validator = StructValidator::new(table)
        .rule("username", non_empty().and(matches_regex("^[a-zA-Z0-9]+$")?))?
        .rule("password", min_char(8))?
        .rule("age", greater_than(3.0).and(lower_than(120.0)))?;

    let signup = Signup {
        username: "bad name!".into(),
        password: "hunter2".into(),
        age: 42,
    };

    let catalog = MessageCatalog::default().with_template("minChar", "use at least %v characters");
    let errors = validator.validate(&signup);

    for (field, messages) in errors.to_messages(&catalog) {
        for (key, text) in messages {
            println!("{field} [{key}]: {text}");
        }
    }

    Ok(())
}
