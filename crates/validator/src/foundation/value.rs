//! Runtime value model
//!
//! Validators never see application types directly. Every input is first
//! lowered into a [`Value`], a closed set of shapes that validators can
//! inspect without reflection.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

// ============================================================================
// VALUE
// ============================================================================

/// Unix seconds of `0001-01-01T00:00:00Z`, the zero timestamp.
const ZERO_TIME_SECS: i64 = -62_135_596_800;

/// A dynamically shaped input value.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{Value, ValueKind};
///
/// let v = Value::from("alice");
/// assert_eq!(v.kind(), ValueKind::Text);
/// assert!(!v.is_zero());
/// assert!(Value::from(0).is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// UTF-8 text.
    Text(String),
    /// Ordered list of values.
    Sequence(Vec<Value>),
    /// String-keyed map.
    Mapping(IndexMap<String, Value>),
    /// Struct-like record with named fields.
    Record(Record),
    /// Point in time.
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// Returns the shape of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Mapping(_) => ValueKind::Mapping,
            Self::Record(_) => ValueKind::Record,
            Self::Timestamp(_) => ValueKind::Timestamp,
        }
    }

    /// Returns true if this is the zero value of its shape.
    ///
    /// Containers are zero when empty. A record is zero when every field
    /// is zero, so a record with no fields is zero as well. The zero
    /// timestamp is `0001-01-01T00:00:00Z`; the Unix epoch is not zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Int(i) => *i == 0,
            Self::Float(f) => *f == 0.0,
            Self::Text(s) => s.is_empty(),
            Self::Sequence(items) => items.is_empty(),
            Self::Mapping(map) => map.is_empty(),
            Self::Record(record) => record.values().all(Value::is_zero),
            Self::Timestamp(ts) => {
                ts.timestamp() == ZERO_TIME_SECS && ts.timestamp_subsec_nanos() == 0
            }
        }
    }

    /// Returns the value as a number if it is an `Int` or a `Float`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the value as an exact [`Number`] if it is numeric.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Int(i) => Some(Number::Int(*i)),
            Self::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }

    /// Returns the text if this is a `Text` value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the record if this is a `Record` value.
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Mapping(map) => write_entries(f, map.iter()),
            Self::Record(record) => write_entries(f, record.iter()),
            Self::Timestamp(ts) => write!(f, "{ts}"),
        }
    }
}

fn write_entries<'a>(
    f: &mut fmt::Formatter<'_>,
    entries: impl Iterator<Item = (&'a String, &'a Value)>,
) -> fmt::Result {
    f.write_str("{")?;
    for (i, (key, value)) in entries.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}: {value}")?;
    }
    f.write_str("}")
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<V: Into<Value>> From<IndexMap<String, V>> for Value {
    fn from(value: IndexMap<String, V>) -> Self {
        Self::Mapping(value.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

// ============================================================================
// NUMBER
// ============================================================================

/// 2^63, the first `f64` above `i64::MAX`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// A numeric value that keeps integers exact.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use fieldcheck_validator::foundation::Number;
///
/// let n = Number::Int(9_007_199_254_740_993);
/// assert_eq!(n.compare(9_007_199_254_740_992.0), Some(Ordering::Greater));
/// assert_eq!(n.to_string(), "9007199254740993");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Compares against an `f64` bound without rounding integers.
    ///
    /// Returns `None` when either side is NaN.
    #[must_use]
    pub fn compare(self, bound: f64) -> Option<Ordering> {
        match self {
            Self::Float(f) => f.partial_cmp(&bound),
            Self::Int(i) => compare_int(i, bound),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn compare_int(value: i64, bound: f64) -> Option<Ordering> {
    if bound.is_nan() {
        return None;
    }
    if bound >= I64_LIMIT {
        return Some(Ordering::Less);
    }
    if bound < -I64_LIMIT {
        return Some(Ordering::Greater);
    }

    // floor(bound) is a whole number in i64 range, so the cast is exact
    let floor = bound.floor();
    match value.cmp(&(floor as i64)) {
        Ordering::Equal if bound > floor => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

// ============================================================================
// VALUE KIND
// ============================================================================

/// Lightweight classification of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Text,
    Sequence,
    Mapping,
    Record,
    Timestamp,
}

impl ValueKind {
    /// Lowercase name used in error params.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Record => "record",
            Self::Timestamp => "timestamp",
        }
    }

    /// Returns true for `Int` and `Float`.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// A struct-like value: named fields in declaration order.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{Record, Value};
///
/// let user = Record::new()
///     .with_field("username", "alice")
///     .with_field("age", 30);
///
/// assert_eq!(user.get("age"), Some(&Value::Int(30)));
/// assert!(user.get("email").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Creates a record with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing any previous value with the same name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a field, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns true if the record has a field with this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Iterates over field values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
