//! Parsing of textual quantities at the input boundary.

use crate::error::{DomainError, DomainResult};

/// Parse a stock quantity from user-supplied text.
///
/// Accepts an optionally signed base-10 integer, ignoring surrounding
/// whitespace. Anything else (`"ten"`, `"1.5"`, values beyond `i64`) is an
/// [`DomainError::InvalidQuantity`].
pub fn parse_quantity(raw: &str) -> DomainResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| DomainError::invalid_quantity(format!("{raw:?}: {e}")))
}
