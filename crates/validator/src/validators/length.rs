//! String length validators
//!
//! By default, length is measured in Unicode scalar values (chars).
//! Use the `.bytes()` constructor for byte-length counting when the input
//! is known to be ASCII.

use crate::foundation::ValidationError;

/// Key reported by [`MinChar`].
pub const MIN_CHAR: &str = "minChar";
/// Key reported by [`MaxChar`].
pub const MAX_CHAR: &str = "maxChar";

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// MIN CHAR
// ============================================================================

crate::validator! {
    /// Validates that a string has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinChar { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    error(self, input) { ValidationError::new(MIN_CHAR).with_param(self.min) }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_char(min: usize);
}

impl MinChar {
    /// Creates a minimum length validator that counts bytes.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// MAX CHAR
// ============================================================================

crate::validator! {
    /// Validates that a string has at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxChar { max: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) <= self.max }
    error(self, input) { ValidationError::new(MAX_CHAR).with_param(self.max) }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_char(max: usize);
}

impl MaxChar {
    /// Creates a maximum length validator that counts bytes.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
