//! Error raised when free text names no known category.

use thiserror::Error;

/// A name did not match any known variant of a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseCategoryError {
    /// Vocabulary being parsed, e.g. "dish category".
    pub kind: &'static str,
    /// Text that failed to parse.
    pub value: String,
}

impl ParseCategoryError {
    /// Build an error for `value` in the `kind` vocabulary.
    #[must_use]
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}
