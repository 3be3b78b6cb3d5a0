//! Built-in validators
//!
//! # Categories
//!
//! - **Presence**: [`NonEmpty`]
//! - **Numeric**: [`GreaterThan`], [`LowerThan`]
//! - **Length**: [`MinChar`], [`MaxChar`]
//! - **Content**: [`Email`], [`MatchesRegex`], [`Uuid`]
//! - **Time**: [`Before`], [`After`]
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let password = non_empty().and(min_char(8));
//! let age = greater_than(3.0).and(lower_than(120.0));
//!
//! assert!(password.validate(&Value::from("validPassword123")).is_ok());
//! assert!(age.validate(&Value::from(150)).is_err());
//! ```

pub mod content;
pub mod length;
pub mod presence;
pub mod range;
pub mod time;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use content::{EMAIL, Email, MatchesRegex, REGEX, UUID, Uuid, email, matches_regex, uuid};
pub use length::{LengthMode, MAX_CHAR, MIN_CHAR, MaxChar, MinChar, max_char, min_char};
pub use presence::{NON_ZERO, NonEmpty, non_empty};
pub use range::{GREATER_THAN, GreaterThan, LOWER_THAN, LowerThan, greater_than, lower_than};
pub use time::{AFTER, After, BEFORE, Before, after, before};
