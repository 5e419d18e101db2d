//! Feature assembly: one flat named-value row per transaction.

use std::collections::BTreeMap;

use serde::Serialize;

use cadence_core::{DateFormatError, Transaction, dates};

use crate::{aggregates, intervals, periodicity, vendors};

/// One feature value. The classifier handoff is a flat object of
/// numbers and booleans, so the serialized form is untagged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl FeatureValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FeatureValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FeatureValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i64> for FeatureValue {
    fn from(v: i64) -> Self {
        FeatureValue::Int(v)
    }
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        FeatureValue::Float(v)
    }
}

impl From<bool> for FeatureValue {
    fn from(v: bool) -> Self {
        FeatureValue::Bool(v)
    }
}

/// Flat feature row produced fresh per (transaction, history) call.
pub type FeatureRow = BTreeMap<&'static str, FeatureValue>;

/// Same-day-of-month tolerances emitted as separate features.
const SAME_DAY_TOLERANCES: [(&str, i64); 3] = [
    ("same_day_exact", 0),
    ("same_day_off_1", 1),
    ("same_day_off_2", 2),
];

/// (key, target gap, tolerance) bands for the days-apart detector.
const DAYS_APART_BANDS: [(&str, i64, i64); 4] = [
    ("14_days_apart_exact", 14, 0),
    ("14_days_apart_off_by_1", 14, 1),
    ("7_days_apart_exact", 7, 0),
    ("7_days_apart_off_by_1", 7, 1),
];

/// Compute every feature for one transaction against its history.
///
/// A pure function of its inputs: nothing is kept across calls and the
/// inputs are never mutated. Fails only when a date needed for a hard
/// day-count comparison does not parse; the calendar-component
/// features degrade to the -1 sentinel instead of failing.
pub fn extract_features(
    transaction: &Transaction,
    history: &[Transaction],
) -> Result<FeatureRow, DateFormatError> {
    let mut row = FeatureRow::new();

    row.insert(
        "n_transactions_same_amount",
        aggregates::count_same_amount(transaction, history).into(),
    );
    row.insert(
        "percent_transactions_same_amount",
        aggregates::percent_same_amount(transaction, history).into(),
    );
    row.insert(
        "n_transactions_same_vendor",
        aggregates::count_same_vendor(transaction, history).into(),
    );
    row.insert("max_transaction_amount", aggregates::max_amount(history).into());
    row.insert("min_transaction_amount", aggregates::min_amount(history).into());
    row.insert(
        "is_recurring_mobile_transaction",
        vendors::is_recurring_mobile(transaction).into(),
    );
    row.insert("day_of_week", dates::weekday(&transaction.date).into());
    row.insert("month", dates::month(&transaction.date).into());
    row.insert("day", dates::day(&transaction.date).into());
    row.insert("year", dates::year(&transaction.date).into());
    row.insert("ends_in_99", aggregates::ends_in_99(transaction).into());
    row.insert("amount", transaction.amount.into());

    for (key, days_off) in SAME_DAY_TOLERANCES {
        row.insert(
            key,
            periodicity::count_same_day_of_month(transaction, history, days_off)?.into(),
        );
    }
    for (key, days_apart, days_off) in DAYS_APART_BANDS {
        row.insert(
            key,
            periodicity::count_days_apart(transaction, history, days_apart, days_off)?.into(),
        );
    }

    row.insert("is_insurance", vendors::is_insurance(transaction).into());
    row.insert("is_utility", vendors::is_utility(transaction).into());
    row.insert(
        "is_always_recurring",
        vendors::is_always_recurring(transaction).into(),
    );

    let stats = intervals::interval_stats(history)?;
    row.insert("avg_days_between_transactions", stats.avg_days_between.into());
    row.insert(
        "std_dev_days_between_transactions",
        stats.std_dev_days_between.into(),
    );
    row.insert("monthly_recurrence", stats.monthly_recurrence.into());
    row.insert("same_weekday", stats.same_weekday.into());
    row.insert("same_amount", stats.amount_consistency.into());

    Ok(row)
}
