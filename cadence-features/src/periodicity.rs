//! Periodicity detectors: count history entries lying near an integer
//! multiple of a target day gap from the transaction, or sharing its
//! day of month within a tolerance.

use cadence_core::dates::{day_of_month, days_since_epoch};
use cadence_core::{DateFormatError, Transaction};

/// Number of history entries within `days_off` days of some positive
/// multiple of `days_apart` days from `transaction`, in either time
/// direction.
///
/// With `days_apart = 14` and `days_off = 1`, entries 13-15, 27-29,
/// 41-43, ... days away all count. Entries closer than
/// `days_apart - days_off` are skipped outright, so a same-day
/// duplicate (or the transaction itself) never inflates the count.
///
/// A history entry whose date does not parse fails the whole count:
/// there is no sentinel value for a day-count comparison.
pub fn count_days_apart(
    transaction: &Transaction,
    history: &[Transaction],
    days_apart: i64,
    days_off: i64,
) -> Result<i64, DateFormatError> {
    let anchor = days_since_epoch(&transaction.date)?;

    let mut n = 0;
    for t in history {
        let diff = (days_since_epoch(&t.date)? - anchor).abs();
        // Too close to be even one period away.
        if diff < days_apart - days_off {
            continue;
        }
        let remainder = diff % days_apart;
        if remainder <= days_off || days_apart - remainder <= days_off {
            n += 1;
        }
    }
    Ok(n)
}

/// Number of history entries whose raw day-of-month field differs from
/// the transaction's by at most `days_off`. Uses the unvalidated third
/// date field, so a nonsense day like 40 still compares.
pub fn count_same_day_of_month(
    transaction: &Transaction,
    history: &[Transaction],
    days_off: i64,
) -> Result<i64, DateFormatError> {
    let anchor = day_of_month(&transaction.date)?;

    let mut n = 0;
    for t in history {
        if (day_of_month(&t.date)? - anchor).abs() <= days_off {
            n += 1;
        }
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(date: &str) -> Transaction {
        Transaction::new("Acme", 10.0, date)
    }

    #[test]
    fn test_exact_multiples_count() {
        let anchor = txn("2024-01-01");
        let history = vec![
            txn("2024-01-15"), // 14 days
            txn("2024-01-29"), // 28 days
            txn("2024-02-26"), // 56 days
        ];
        assert_eq!(count_days_apart(&anchor, &history, 14, 0).unwrap(), 3);
        // All of those are also multiples of 7.
        assert_eq!(count_days_apart(&anchor, &history, 7, 0).unwrap(), 3);
    }

    #[test]
    fn test_tolerance_band_straddles_the_multiple() {
        let anchor = txn("2024-01-01");
        let history = vec![
            txn("2024-01-14"), // 13 days: one short of a period
            txn("2024-01-16"), // 15 days: one past it
            txn("2024-01-18"), // 17 days: outside the band
        ];
        assert_eq!(count_days_apart(&anchor, &history, 14, 0).unwrap(), 0);
        assert_eq!(count_days_apart(&anchor, &history, 14, 1).unwrap(), 2);
    }

    #[test]
    fn test_entries_below_one_period_are_skipped() {
        let anchor = txn("2024-01-10");
        let history = vec![
            txn("2024-01-10"), // the transaction itself
            txn("2024-01-11"), // next-day duplicate
        ];
        assert_eq!(count_days_apart(&anchor, &history, 14, 1).unwrap(), 0);
        assert_eq!(count_days_apart(&anchor, &history, 7, 1).unwrap(), 0);
    }

    #[test]
    fn test_direction_symmetry() {
        // Swapping which transaction is the anchor gives the same
        // inclusion decision for the pair.
        let a = txn("2024-01-01");
        let b = txn("2024-02-12"); // 42 days apart
        let ab = count_days_apart(&a, &[b.clone()], 14, 1).unwrap();
        let ba = count_days_apart(&b, &[a.clone()], 14, 1).unwrap();
        assert_eq!(ab, 1);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_unparseable_history_date_is_a_hard_error() {
        let anchor = txn("2024-01-01");
        let history = vec![txn("2024-01-15"), txn("2024-13-40")];
        let err = count_days_apart(&anchor, &history, 14, 0).unwrap_err();
        assert_eq!(err, DateFormatError("2024-13-40".to_string()));
    }

    #[test]
    fn test_same_day_of_month_tolerances() {
        let anchor = txn("2024-01-15");
        let history = vec![
            txn("2024-02-15"),
            txn("2024-03-16"),
            txn("2024-04-17"),
            txn("2024-05-20"),
        ];
        assert_eq!(count_same_day_of_month(&anchor, &history, 0).unwrap(), 1);
        assert_eq!(count_same_day_of_month(&anchor, &history, 1).unwrap(), 2);
        assert_eq!(count_same_day_of_month(&anchor, &history, 2).unwrap(), 3);
    }

    #[test]
    fn test_same_day_of_month_reads_raw_field() {
        // Day 40 is not a calendar day but still compares.
        let anchor = txn("2024-01-15");
        let history = vec![txn("2024-13-40")];
        assert_eq!(count_same_day_of_month(&anchor, &history, 2).unwrap(), 0);
        assert_eq!(count_same_day_of_month(&anchor, &history, 25).unwrap(), 1);
    }
}
