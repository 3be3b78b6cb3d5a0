//! Combinators for composing validators
//!
//! - [`Composite`]: runs several validators on one value, merging failures
//! - [`Each`]: applies a validator to every element of a sequence
//! - [`StructValidator`] / [`RecordValidator`]: per-field dispatch

pub mod composite;
pub mod each;
pub mod field;

pub use composite::Composite;
pub use each::{EACH, Each, each};
pub use field::{FieldTable, Getter, RecordValidator, StructValidator};
