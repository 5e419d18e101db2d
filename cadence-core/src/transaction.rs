//! Transaction record consumed by the feature engine.

use serde::{Deserialize, Serialize};

/// One financial event within a comparison scope (one payer/account).
///
/// The engine never mutates a `Transaction`; every feature is a pure
/// function of one transaction plus a read-only history slice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Free-text merchant/description string
    pub name: String,
    /// Signed monetary value
    pub amount: f64,
    /// Calendar date in `YYYY-MM-DD` form. Kept as a string: the raw
    /// day-of-month accessor reads the third `-` field without
    /// calendar validation, so parsing happens per component.
    pub date: String,
}

impl Transaction {
    /// Create a new Transaction
    pub fn new(name: impl Into<String>, amount: f64, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            date: date.into(),
        }
    }
}
