//! Interval statistics over the full history: consecutive-gap mean and
//! spread, monthly-recurrence ratio, weekday consistency, and amount
//! consistency.

use cadence_core::dates::parse_date;
use cadence_core::{DateFormatError, Transaction};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Gap lengths (days) treated as a monthly cadence: roughly 30 ± 7.
const MONTHLY_GAP_DAYS: std::ops::RangeInclusive<i64> = 23..=38;

/// Amounts within ±5% of the baseline count as consistent.
const AMOUNT_BAND: f64 = 0.05;

/// Gap and consistency statistics for one history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntervalStats {
    /// Mean of the consecutive day gaps between date-sorted entries
    pub avg_days_between: f64,
    /// Sample standard deviation of those gaps (0.0 below 2 gaps)
    pub std_dev_days_between: f64,
    /// Fraction of gaps inside the monthly band, in [0, 1]
    pub monthly_recurrence: f64,
    /// 1 if every entry falls on the identical weekday, else 0
    pub same_weekday: i64,
    /// Fraction of amounts within ±5% of the first entry's amount
    pub amount_consistency: f64,
}

impl IntervalStats {
    /// Defined neutral record for histories with fewer than 2 entries.
    pub fn zeroed() -> Self {
        Self {
            avg_days_between: 0.0,
            std_dev_days_between: 0.0,
            monthly_recurrence: 0.0,
            same_weekday: 0,
            amount_consistency: 0.0,
        }
    }
}

/// Compute interval statistics for a history. Input order is
/// irrelevant for the date statistics (entries are sorted internally),
/// but the amount-consistency baseline is the first entry in the
/// caller's order.
///
/// Every entry's date must parse; a malformed one fails the whole
/// computation rather than silently skewing the gap statistics.
pub fn interval_stats(history: &[Transaction]) -> Result<IntervalStats, DateFormatError> {
    if history.len() < 2 {
        return Ok(IntervalStats::zeroed());
    }

    let mut dates: Vec<NaiveDate> = history
        .iter()
        .map(|t| parse_date(&t.date))
        .collect::<Result<_, _>>()?;
    dates.sort_unstable();

    let gaps: Vec<i64> = dates.windows(2).map(|w| (w[1] - w[0]).num_days()).collect();

    let monthly_count = gaps.iter().filter(|g| MONTHLY_GAP_DAYS.contains(*g)).count();
    let monthly_recurrence = monthly_count as f64 / gaps.len() as f64;

    let first_weekday = dates[0].weekday();
    let same_weekday = dates.iter().all(|d| d.weekday() == first_weekday) as i64;

    // Baseline is the first entry as given, not the earliest date.
    let base = history[0].amount;
    let amount_consistency = if base == 0.0 {
        0.0
    } else {
        let consistent = history
            .iter()
            .filter(|t| (t.amount - base).abs() / base.abs() <= AMOUNT_BAND)
            .count();
        consistent as f64 / history.len() as f64
    };

    Ok(IntervalStats {
        avg_days_between: mean(&gaps),
        std_dev_days_between: sample_std_dev(&gaps),
        monthly_recurrence,
        same_weekday,
        amount_consistency,
    })
}

fn mean(values: &[i64]) -> f64 {
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

/// Sample standard deviation (n − 1 denominator); 0.0 below 2 values.
fn sample_std_dev(values: &[i64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - m;
            d * d
        })
        .sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}
