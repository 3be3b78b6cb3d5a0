//! Integration tests for fieldcheck-validator.

mod common;
mod custom_validator;
mod messages;
mod records;
mod user_entity;
