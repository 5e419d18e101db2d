//! Vendor classifiers: case-insensitive, word-boundary matches of the
//! merchant name against fixed category term lists.
//!
//! The term lists carry partial stems (`insur`, `insuranc`, `utilit`).
//! They are kept verbatim: with a boundary on both edges a stem only
//! matches as a standalone token, and that asymmetric behavior is part
//! of the feature contract. A name may match several categories, or
//! none; the categories carry no priority order.

use cadence_core::Transaction;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ALWAYS_RECURRING: Regex =
        Regex::new(r"(?i)\b(netflix|spotify|google storage|hulu)\b").unwrap();
    static ref INSURANCE: Regex =
        Regex::new(r"(?i)\b(insur|geico|allstate|state farm|progressive|insuranc)\b").unwrap();
    static ref UTILITY: Regex =
        Regex::new(r"(?i)\b(water|electricity|gas|internet|cable|energy|utilit|utility)\b")
            .unwrap();
    static ref MOBILE: Regex =
        Regex::new(r"(?i)\b(t-mobile|at&t|verizon|boost mobile|tello mobile)\b").unwrap();
}

/// True if the merchant is a known always-recurring subscription
/// service; every transaction from these vendors is recurring.
pub fn is_always_recurring(transaction: &Transaction) -> bool {
    ALWAYS_RECURRING.is_match(&transaction.name)
}

/// True if the merchant is a known insurance company.
pub fn is_insurance(transaction: &Transaction) -> bool {
    INSURANCE.is_match(&transaction.name)
}

/// True if the merchant is a known utility provider.
pub fn is_utility(transaction: &Transaction) -> bool {
    UTILITY.is_match(&transaction.name)
}

/// True if the merchant is a known mobile carrier; carrier bills are
/// treated as recurring.
pub fn is_recurring_mobile(transaction: &Transaction) -> bool {
    MOBILE.is_match(&transaction.name)
}
