//! Field references.
//!
//! Fields are addressed by zero-based position only. A reference must be a
//! plain run of ASCII digits that fits in `usize`; signs, whitespace and
//! empty tokens are rejected.

use crate::error::{FilterError, Result};

/// Parse one field reference into a zero-based index.
pub fn parse_field_index(token: &str) -> Result<usize> {
    let invalid = || FilterError::InvalidFieldIndex {
        token: token.to_string(),
    };

    // `usize::from_str` would accept a leading '+'
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    token.parse().map_err(|_| invalid())
}

/// Parse field references in order, keeping duplicates.
pub fn parse_field_indices<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<usize>> {
    tokens
        .iter()
        .map(|t| parse_field_index(t.as_ref()))
        .collect()
}
