//! Field-level checks applied when turning a raw request payload into a typed
//! create input.
//!
//! A text field counts as missing when it is absent, `null`, or the empty
//! string. Whitespace-only values are kept as given.

use crate::error::CoreError;

/// Require a text field to be present and non-empty.
///
/// Returns [`CoreError::Validation`] with the message `"<field> is required"`
/// otherwise.
pub fn require_text(field: &str, value: Option<String>) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Normalize an optional text field: an empty string is stored as `NULL`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
