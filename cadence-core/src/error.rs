//! Error types for the feature engine.

use thiserror::Error;

/// A transaction date string that does not parse as a valid
/// `YYYY-MM-DD` calendar date.
///
/// Calendar-component extraction catches this at the boundary and
/// degrades to the `-1` sentinel; day-count comparisons have no
/// sentinel and propagate it instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid transaction date '{0}': expected YYYY-MM-DD")]
pub struct DateFormatError(pub String);
