//! Aggregate statistics: O(n) reductions over the transaction history.

use cadence_core::Transaction;

/// Smallest amount in the history, or 0.0 for an empty history.
pub fn min_amount(history: &[Transaction]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    history
        .iter()
        .map(|t| t.amount)
        .fold(f64::INFINITY, f64::min)
}

/// Largest amount in the history, or 0.0 for an empty history.
pub fn max_amount(history: &[Transaction]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    history
        .iter()
        .map(|t| t.amount)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Number of history entries whose name equals the transaction's name
/// exactly (case-sensitive).
pub fn count_same_vendor(transaction: &Transaction, history: &[Transaction]) -> i64 {
    history.iter().filter(|t| t.name == transaction.name).count() as i64
}

/// Number of history entries whose amount equals the transaction's
/// amount exactly.
pub fn count_same_amount(transaction: &Transaction, history: &[Transaction]) -> i64 {
    history
        .iter()
        .filter(|t| t.amount == transaction.amount)
        .count() as i64
}

/// Fraction of history entries sharing the transaction's amount;
/// 0.0 for an empty history.
pub fn percent_same_amount(transaction: &Transaction, history: &[Transaction]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    count_same_amount(transaction, history) as f64 / history.len() as f64
}

/// True if the amount ends in .99 (19.99, 5.99, ...). Rounds the cent
/// value first so binary float representation cannot shift 19.99 off
/// of 1999 cents.
pub fn ends_in_99(transaction: &Transaction) -> bool {
    ((transaction.amount * 100.0).round() as i64).rem_euclid(100) == 99
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(name: &str, amount: f64) -> Transaction {
        Transaction::new(name, amount, "2024-01-01")
    }

    fn history() -> Vec<Transaction> {
        vec![
            txn("Netflix", 9.99),
            txn("Netflix", 9.99),
            txn("City Water", 43.10),
            txn("Gym", 25.00),
        ]
    }

    #[test]
    fn test_min_max_bound_every_amount() {
        let h = history();
        assert_eq!(min_amount(&h), 9.99);
        assert_eq!(max_amount(&h), 43.10);
        for t in &h {
            assert!(min_amount(&h) <= t.amount && t.amount <= max_amount(&h));
        }
    }

    #[test]
    fn test_min_max_empty_history() {
        assert_eq!(min_amount(&[]), 0.0);
        assert_eq!(max_amount(&[]), 0.0);
    }

    #[test]
    fn test_same_vendor_is_case_sensitive() {
        let h = history();
        assert_eq!(count_same_vendor(&txn("Netflix", 1.0), &h), 2);
        assert_eq!(count_same_vendor(&txn("NETFLIX", 1.0), &h), 0);
    }

    #[test]
    fn test_same_amount_count_and_percent_agree() {
        let h = history();
        let t = txn("Anything", 9.99);
        assert_eq!(count_same_amount(&t, &h), 2);
        assert_eq!(percent_same_amount(&t, &h), 2.0 / 4.0);
        assert_eq!(percent_same_amount(&t, &[]), 0.0);
    }

    #[test]
    fn test_ends_in_99() {
        assert!(ends_in_99(&txn("x", 19.99)));
        assert!(ends_in_99(&txn("x", 0.99)));
        assert!(ends_in_99(&txn("x", 1299.99)));
        assert!(!ends_in_99(&txn("x", 20.00)));
        assert!(!ends_in_99(&txn("x", 19.98)));
        assert!(!ends_in_99(&txn("x", 0.0)));
    }
}
