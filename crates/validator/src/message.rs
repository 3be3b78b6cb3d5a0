//! Message catalog - renders symbolic error entries as text
//!
//! A catalog maps error keys to templates. Each `%v` in a template takes
//! the next positional param of the entry; `%%` is a literal percent sign.
//!
//! The built-in table is returned by [`MessageCatalog::default`]. Overrides
//! are applied by value ([`with_template`](MessageCatalog::with_template),
//! [`merge`](MessageCatalog::merge)) or loaded from JSON
//! ([`from_json`](MessageCatalog::from_json)); a catalog is never mutated
//! behind the caller's back.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::foundation::ErrorEntry;

/// Rendered text for keys that have no template.
pub const FALLBACK_MESSAGE: &str = "invalid data";

/// Placeholder rendered in place of a param the entry did not supply.
pub const MISSING_PARAM: &str = "%!v(MISSING)";

/// Rendered messages: field name to error key to text.
pub type Messages = IndexMap<String, IndexMap<String, String>>;

const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    ("nonZero", "value cannot be empty"),
    ("before", "%v is not before %v"),
    ("after", "%v is not after %v"),
    ("lowerThan", "%v is not lower than %v"),
    ("greaterThan", "%v is not greater than %v"),
    ("minChar", "too short, minimum %v characters"),
    ("maxChar", "too long, maximum %v characters"),
    ("email", "'%v' is an invalid email address"),
    ("regex", "'%v' does not match '%v'"),
    ("uuid", "'%v' is an invalid uuid"),
    ("NaN", "expected a number, got %v"),
    ("notString", "expected a string, got %v"),
    ("notTimestamp", "expected a timestamp, got %v"),
    ("notSlice", "expected a sequence, got %v"),
    ("each", "%v of %v elements are invalid (indices %v)"),
];

/// Error loading a catalog.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// The input is not a JSON object of string templates.
    #[error("invalid message catalog: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// MESSAGE CATALOG
// ============================================================================

/// Error key to template lookup.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::ErrorEntry;
/// use fieldcheck_validator::message::MessageCatalog;
///
/// let catalog = MessageCatalog::default();
/// let entry = ErrorEntry::new("lowerThan").with_param(150).with_param(120);
/// assert_eq!(catalog.render(&entry), "150 is not lower than 120");
///
/// let custom = catalog.with_template("lowerThan", "must be below %v");
/// let entry = ErrorEntry::new("lowerThan").with_param(120);
/// assert_eq!(custom.render(&entry), "must be below 120");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    templates: IndexMap<String, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        DEFAULT_TEMPLATES
            .iter()
            .map(|(key, template)| ((*key).to_owned(), (*template).to_owned()))
            .collect()
    }
}

impl FromIterator<(String, String)> for MessageCatalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            templates: iter.into_iter().collect(),
        }
    }
}

impl MessageCatalog {
    /// A catalog with no templates; every key renders as the fallback.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            templates: IndexMap::new(),
        }
    }

    /// Returns a copy with `key` set to `template`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_template(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(key.into(), template.into());
        self
    }

    /// Returns a copy with every template of `overrides` applied.
    #[must_use = "builder methods must be chained or built"]
    pub fn merge(mut self, overrides: MessageCatalog) -> Self {
        self.templates.extend(overrides.templates);
        self
    }

    /// Loads a JSON object of overrides on top of the built-in table.
    ///
    /// ```
    /// use fieldcheck_validator::message::MessageCatalog;
    ///
    /// let catalog = MessageCatalog::from_json(r#"{"nonZero": "required"}"#)?;
    /// assert_eq!(catalog.template("nonZero"), Some("required"));
    /// assert!(catalog.template("email").is_some());
    /// # Ok::<(), fieldcheck_validator::message::CatalogError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the input is not an object of
    /// string values.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let overrides: MessageCatalog = serde_json::from_str(json)?;
        tracing::debug!(overrides = overrides.len(), "loaded message catalog");
        Ok(Self::default().merge(overrides))
    }

    /// Looks up the template for a key.
    #[must_use]
    pub fn template(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if the catalog has no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Renders an entry. Unknown keys render as [`FALLBACK_MESSAGE`].
    #[must_use]
    pub fn render(&self, entry: &ErrorEntry) -> String {
        match self.template(entry.key()) {
            Some(template) => substitute(entry.key(), template, entry.params()),
            None => FALLBACK_MESSAGE.to_owned(),
        }
    }
}

/// Fills `%v` placeholders from `params` in order.
///
/// Missing params become [`MISSING_PARAM`]; surplus params are dropped.
/// Either mismatch is logged, never returned.
fn substitute(key: &str, template: &str, params: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut params_iter = params.iter();
    let mut placeholders = 0usize;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('v') => {
                chars.next();
                placeholders += 1;
                out.push_str(params_iter.next().map_or(MISSING_PARAM, String::as_str));
            }
            Some('%') => {
                chars.next();
                out.push('%');
            }
            _ => out.push('%'),
        }
    }

    if placeholders != params.len() {
        tracing::warn!(
            key,
            expected = placeholders,
            got = params.len(),
            "message params do not match template"
        );
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
